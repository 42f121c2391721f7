/// Ant-style path pattern: `*` matches exactly one path segment, `**`
/// matches any number of segments (including none). All other segments are
/// literal matches.
///
/// Paths are compared segment-wise, so `/admin` and `/admin/` are the same
/// path and `/admin/**` matches `/admin` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    AnyOne,
    AnyDeep,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|s| match s {
                "*" => Segment::AnyOne,
                "**" => Segment::AnyDeep,
                lit => Segment::Literal(lit.to_string()),
            })
            .collect();

        Self { segments }
    }

    pub fn matches(&self, path: &str) -> bool {
        let path: Vec<&str> = split(path).collect();
        matches_segments(&self.segments, &path)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn matches_segments(pattern: &[Segment], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((Segment::AnyDeep, rest)) => {
            // `**` may swallow zero or more leading segments.
            (0..=path.len()).any(|skip| matches_segments(rest, &path[skip..]))
        }
        Some((Segment::AnyOne, rest)) => {
            !path.is_empty() && matches_segments(rest, &path[1..])
        }
        Some((Segment::Literal(lit), rest)) => {
            path.first() == Some(&lit.as_str()) && matches_segments(rest, &path[1..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_matches_exact_path_only() {
        let p = PathPattern::parse("/authenticate");
        assert!(p.matches("/authenticate"));
        assert!(p.matches("/authenticate/"));
        assert!(!p.matches("/authenticate/x"));
        assert!(!p.matches("/auth"));
        assert!(!p.matches("/"));
    }

    #[test]
    fn single_star_matches_one_segment() {
        let p = PathPattern::parse("/admin/*");
        assert!(p.matches("/admin/reports"));
        assert!(!p.matches("/admin"));
        assert!(!p.matches("/admin/reports/2024"));
    }

    #[test]
    fn double_star_matches_any_depth_including_zero() {
        let p = PathPattern::parse("/admin/**");
        assert!(p.matches("/admin"));
        assert!(p.matches("/admin/reports"));
        assert!(p.matches("/admin/reports/2024/q1"));
        assert!(!p.matches("/administrator"));
        assert!(!p.matches("/profile"));
    }

    #[test]
    fn catch_all_matches_everything() {
        let p = PathPattern::parse("/**");
        assert!(p.matches("/"));
        assert!(p.matches("/authenticate"));
        assert!(p.matches("/a/b/c"));
    }

    #[test]
    fn double_star_can_sit_mid_pattern() {
        let p = PathPattern::parse("/admin/**/export");
        assert!(p.matches("/admin/export"));
        assert!(p.matches("/admin/reports/export"));
        assert!(p.matches("/admin/reports/2024/export"));
        assert!(!p.matches("/admin/reports"));
    }
}

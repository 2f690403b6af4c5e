//! Route patterns with named path parameters.
//!
//! A pattern is a sequence of segments. Static segments must match the
//! path exactly (case-sensitive); parameter segments (`:areaId` or
//! `{areaId}`) match any non-empty segment and capture its decoded value.

use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// A literal segment such as `shop`.
    Static(String),
    /// A named parameter such as `areaId`.
    Param(String),
}

impl Segment {
    /// Whether two segments accept exactly the same inputs.
    fn same_shape(&self, other: &Segment) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b)) => a == b,
            (Segment::Param(_), Segment::Param(_)) => true,
            _ => false,
        }
    }
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a pattern such as `/areas/:areaId/machines`.
    ///
    /// A single trailing slash is ignored, so `/shop/` and `/shop` are the
    /// same pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not absolute, contains an empty
    /// segment, or declares an unnamed or repeated parameter.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(RouteError::MissingLeadingSlash {
                pattern: pattern.to_string(),
            });
        };

        let mut segments = Vec::new();
        if rest.is_empty() {
            return Ok(Self {
                raw: pattern.to_string(),
                segments,
            });
        }

        let Some(rest) = strip_trailing_slash(rest) else {
            return Err(RouteError::EmptySegment {
                pattern: pattern.to_string(),
            });
        };

        for part in rest.split('/') {
            if part.is_empty() {
                return Err(RouteError::EmptySegment {
                    pattern: pattern.to_string(),
                });
            }

            let param = part
                .strip_prefix(':')
                .or_else(|| part.strip_prefix('{').and_then(|p| p.strip_suffix('}')));

            let segment = match param {
                Some("") => {
                    return Err(RouteError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                Some(name) => {
                    let already_declared = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if already_declared {
                        return Err(RouteError::DuplicateParam {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    Segment::Param(name.to_string())
                }
                None => Segment::Static(part.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Returns the pattern as it was declared.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the names of the parameters this pattern captures, in order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Whether `other` matches exactly the same set of paths.
    ///
    /// Parameter names do not matter: `/a/:x` and `/a/:y` overlap fully.
    #[must_use]
    pub fn overlaps(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.same_shape(b))
    }

    /// Matches a normalized path (no query or fragment) against this pattern.
    ///
    /// Returns the captured parameters on success.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            strip_trailing_slash(rest)?.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    let value = urlencoding::decode(part)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| part.to_string());
                    params.insert(name.clone(), value);
                }
            }
        }

        Some(params)
    }
}

/// Drops one trailing slash from the part after the leading `/`.
///
/// Returns `None` when nothing is left, as for `//`.
fn strip_trailing_slash(rest: &str) -> Option<&str> {
    let stripped = rest.strip_suffix('/').unwrap_or(rest);
    (!stripped.is_empty()).then_some(stripped)
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Path parameters captured by a route match, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    fn insert(&mut self, name: String, value: String) {
        self.entries.push((name, value));
    }

    /// Returns the value captured for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root() {
        let pattern = RoutePattern::parse("/").expect("should parse");
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn parses_colon_and_brace_params() {
        let colon = RoutePattern::parse("/areas/:areaId/machines").expect("should parse");
        let brace = RoutePattern::parse("/areas/{areaId}/machines").expect("should parse");
        assert_eq!(colon.segments(), brace.segments());
        assert_eq!(colon.param_names().collect::<Vec<_>>(), vec!["areaId"]);
    }

    #[test]
    fn rejects_relative_pattern() {
        let result = RoutePattern::parse("shop");
        assert!(matches!(result, Err(RouteError::MissingLeadingSlash { .. })));
    }

    #[test]
    fn rejects_empty_segment() {
        let result = RoutePattern::parse("/areas//machines");
        assert!(matches!(result, Err(RouteError::EmptySegment { .. })));
    }

    #[test]
    fn rejects_double_slash() {
        assert!(matches!(
            RoutePattern::parse("//"),
            Err(RouteError::EmptySegment { .. })
        ));
        let root = RoutePattern::parse("/").expect("should parse");
        assert!(root.match_path("//").is_none());
        let shop = RoutePattern::parse("/shop/").expect("should parse");
        assert_eq!(shop.segments(), &[Segment::Static("shop".to_string())]);
    }

    #[test]
    fn rejects_unnamed_param() {
        assert!(matches!(
            RoutePattern::parse("/areas/:/machines"),
            Err(RouteError::EmptyParamName { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/areas/{}/machines"),
            Err(RouteError::EmptyParamName { .. })
        ));
    }

    #[test]
    fn rejects_repeated_param() {
        match RoutePattern::parse("/a/:id/b/:id") {
            Err(RouteError::DuplicateParam { name, .. }) => assert_eq!(name, "id"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn matches_static_path() {
        let pattern = RoutePattern::parse("/shop").expect("should parse");
        let params = pattern.match_path("/shop").expect("should match");
        assert!(params.is_empty());
        assert!(pattern.match_path("/shop/").is_some());
        assert!(pattern.match_path("/Shop").is_none());
        assert!(pattern.match_path("/shop/extra").is_none());
    }

    #[test]
    fn root_only_matches_root() {
        let pattern = RoutePattern::parse("/").expect("should parse");
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("/shop").is_none());
    }

    #[test]
    fn captures_param() {
        let pattern = RoutePattern::parse("/areas/:areaId/machines").expect("should parse");
        let params = pattern.match_path("/areas/42/machines").expect("should match");
        assert_eq!(params.get("areaId"), Some("42"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn decodes_param_value() {
        let pattern = RoutePattern::parse("/areas/:areaId/machines").expect("should parse");
        let params = pattern
            .match_path("/areas/north%20wing/machines")
            .expect("should match");
        assert_eq!(params.get("areaId"), Some("north wing"));
    }

    #[test]
    fn param_requires_a_segment() {
        let pattern = RoutePattern::parse("/areas/:areaId/machines").expect("should parse");
        assert!(pattern.match_path("/areas//machines").is_none());
        assert!(pattern.match_path("/areas/machines").is_none());
    }

    #[test]
    fn overlap_ignores_param_names() {
        let a = RoutePattern::parse("/machines/:machineId/maintenance").expect("should parse");
        let b = RoutePattern::parse("/machines/{id}/maintenance").expect("should parse");
        let c = RoutePattern::parse("/machines").expect("should parse");
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}

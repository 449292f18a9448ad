//! Parsing of target card arguments.
//!
//! Target cards are given on the command line as `COPIES:WANTED[:NAME]`,
//! for example `3:1` or `4:2:Lightning Bolt`.
//!
//! ## Error Handling
//!
//! Parsing returns `Err(String)` with a message meant for the user; the
//! caller wraps it into a `CliError::InvalidInput`.

use drawcalc_engine::model::{NamedTarget, TargetGroup};

/// Parse one `COPIES:WANTED[:NAME]` target specification.
///
/// Whitespace around each part is ignored. The name may itself contain `:`.
///
/// # Example
///
/// ```rust
/// # use drawcalc_cli::validation::parse_target;
/// let t = parse_target("4:1:Lightning Bolt").unwrap();
/// assert_eq!(t.group.count_in_deck, 4);
/// assert_eq!(t.group.desired_count, 1);
/// assert_eq!(t.name.as_deref(), Some("Lightning Bolt"));
///
/// assert!(parse_target("4").is_err());
/// assert!(parse_target("x:1").is_err());
/// ```
pub fn parse_target(raw: &str) -> Result<NamedTarget, String> {
    let mut parts = raw.splitn(3, ':');
    let copies = parts.next().unwrap_or_default().trim();
    let Some(wanted) = parts.next().map(str::trim) else {
        return Err(format!(
            "target '{}' must look like COPIES:WANTED[:NAME] (e.g., '3:1')",
            raw
        ));
    };
    let name = parts
        .next()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    let count_in_deck = copies
        .parse::<u32>()
        .map_err(|_| format!("invalid copy count '{}' in target '{}'", copies, raw))?;
    let desired_count = wanted
        .parse::<u32>()
        .map_err(|_| format!("invalid wanted count '{}' in target '{}'", wanted, raw))?;

    Ok(NamedTarget {
        name,
        group: TargetGroup::new(count_in_deck, desired_count),
    })
}

/// Parse every target specification, stopping at the first bad one.
pub fn parse_targets<S: AsRef<str>>(specs: &[S]) -> Result<Vec<NamedTarget>, String> {
    specs.iter().map(|s| parse_target(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_name() {
        let t = parse_target("3:1").unwrap();
        assert_eq!(t.group, TargetGroup::new(3, 1));
        assert_eq!(t.name, None);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let t = parse_target(" 4 : 2 :  Ash Blossom ").unwrap();
        assert_eq!(t.group, TargetGroup::new(4, 2));
        assert_eq!(t.name.as_deref(), Some("Ash Blossom"));
    }

    #[test]
    fn test_name_may_contain_colons() {
        let t = parse_target("1:1:Jace: the Mind Sculptor").unwrap();
        assert_eq!(t.name.as_deref(), Some("Jace: the Mind Sculptor"));
    }

    #[test]
    fn test_empty_name_is_none() {
        let t = parse_target("2:1:").unwrap();
        assert_eq!(t.name, None);
    }

    #[test]
    fn test_rejects_missing_wanted() {
        let msg = parse_target("3").unwrap_err();
        assert!(msg.contains("COPIES:WANTED"));
    }

    #[test]
    fn test_rejects_negative_or_text() {
        assert!(parse_target("-1:1").unwrap_err().contains("copy count"));
        assert!(parse_target("3:many").unwrap_err().contains("wanted count"));
        assert!(parse_target(":1").is_err());
    }

    #[test]
    fn test_parse_targets_stops_at_first_error() {
        let ok = parse_targets(&["3:1", "2:2:Combo Piece"]).unwrap();
        assert_eq!(ok.len(), 2);
        let err = parse_targets(&["3:1", "oops", "x:y"]).unwrap_err();
        assert!(err.contains("oops"));
    }
}

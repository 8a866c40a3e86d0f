use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;

/// Deserializes a list of paths into a sorted set.
///
/// `null` reads as an empty set and duplicates collapse, so records written
/// by older clients still load.
pub fn deserialize_path_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default().into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_path_set")]
        allowed: BTreeSet<String>,
    }

    #[test]
    fn test_null_is_empty() {
        let holder: Holder = serde_json::from_str(r#"{"allowed": null}"#).unwrap();
        assert!(holder.allowed.is_empty());
    }

    #[test]
    fn test_missing_is_empty() {
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.allowed.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let holder: Holder =
            serde_json::from_str(r#"{"allowed": ["/b", "/a", "/b"]}"#).unwrap();
        assert_eq!(holder.allowed.into_iter().collect::<Vec<_>>(), vec!["/a", "/b"]);
    }
}

use serde::{Deserialize, Serialize};

/// Compiled summary of one icon directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Directory name, kebab-case
    pub name: String,
    /// PascalCase form of `name`
    pub identifier: String,
    /// Sizes that produced a component, in lookup order. Never empty.
    pub sizes: Vec<u32>,
    #[serde(default)]
    pub colorful: bool,
}

impl ManifestEntry {
    pub fn new(name: impl Into<String>, sizes: Vec<u32>, colorful: bool) -> Self {
        let name = name.into();
        Self {
            identifier: to_pascal_case(&name),
            name,
            sizes,
            colorful,
        }
    }

    /// Exported identifier of one size variant, e.g. `ArrowDown24`
    pub fn component_identifier(&self, size: u32) -> String {
        component_identifier(&self.identifier, size)
    }

    /// Iterate `(size, identifier)` pairs in manifest order
    pub fn components(&self) -> impl Iterator<Item = (u32, String)> + '_ {
        self.sizes
            .iter()
            .map(move |&size| (size, self.component_identifier(size)))
    }
}

pub fn component_identifier(pascal_name: &str, size: u32) -> String {
    format!("{}{}", pascal_name, size)
}

/// Convert a kebab-case name to PascalCase (`arrow-down` -> `ArrowDown`)
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Total number of generated components across a manifest
pub fn component_count(manifest: &[ManifestEntry]) -> usize {
    manifest.iter().map(|entry| entry.sizes.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("arrow-down"), "ArrowDown");
        assert_eq!(to_pascal_case("colorful-badge"), "ColorfulBadge");
        assert_eq!(to_pascal_case("x"), "X");
        assert_eq!(to_pascal_case("chevron-2x-left"), "Chevron2xLeft");
    }

    #[test]
    fn test_component_identifiers() {
        let entry = ManifestEntry::new("arrow-down", vec![16, 24], false);
        assert_eq!(entry.identifier, "ArrowDown");

        let components: Vec<_> = entry.components().collect();
        assert_eq!(
            components,
            vec![(16, "ArrowDown16".to_string()), (24, "ArrowDown24".to_string())]
        );
    }

    #[test]
    fn test_manifest_json_shape() {
        let entry = ManifestEntry::new("arrow-down", vec![16, 24], false);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"name":"arrow-down","identifier":"ArrowDown","sizes":[16,24],"colorful":false}"#
        );

        let manifest = vec![entry, ManifestEntry::new("colorful-badge", vec![24], true)];
        assert_eq!(component_count(&manifest), 3);
    }
}

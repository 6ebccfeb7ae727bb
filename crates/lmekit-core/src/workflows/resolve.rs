use crate::core::mapping::{MappingRecord, Query, ResolveError, render_indices, shift_indices};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The zero-based resolution of one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub indices: Vec<usize>,
}

/// Resolves several names at once, in request order.
///
/// A name requested twice is resolved once, at its first position. A lone name
/// keeps its specific error; otherwise every failing name is reported together.
pub fn resolve_names(
    mapping: &MappingRecord,
    names: &[String],
) -> Result<Vec<Resolution>, ResolveError> {
    let resolver = mapping.resolver();
    let mut unique: Vec<&String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }

    if let [name] = unique.as_slice() {
        return Ok(vec![Resolution {
            name: (*name).clone(),
            indices: resolver.resolve(name)?,
        }]);
    }

    let queries: Vec<Query> = unique
        .iter()
        .map(|name| Query::Name((*name).clone()))
        .collect();
    let resolved = resolver.resolve_each(&queries)?;
    Ok(unique
        .into_iter()
        .zip(resolved)
        .map(|(name, indices)| Resolution {
            name: name.clone(),
            indices,
        })
        .collect())
}

/// One line per name: the name followed by its space-separated indices.
pub fn render_plain(resolutions: &[Resolution], one_based: bool) -> String {
    resolutions
        .iter()
        .map(|r| format!("{} {}", r.name, render_indices(&r.indices, " ", one_based)))
        .collect::<Vec<_>>()
        .join("\n")
}

struct ResolutionMap<'a> {
    resolutions: &'a [Resolution],
    one_based: bool,
}

impl Serialize for ResolutionMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.resolutions.len()))?;
        for resolution in self.resolutions {
            map.serialize_entry(
                &resolution.name,
                &shift_indices(&resolution.indices, self.one_based),
            )?;
        }
        map.end()
    }
}

/// A JSON object from name to index list, with keys in request order.
pub fn render_json(
    resolutions: &[Resolution],
    one_based: bool,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ResolutionMap {
        resolutions,
        one_based,
    })
}

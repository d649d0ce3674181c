use std::fmt;

///
/// SearchField
///
/// A field a query may match against. Not every record kind carries
/// every field; absent fields never match.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum SearchField {
    Description,
    Email,
    Name,
    Role,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Description => "description",
            Self::Email => "email",
            Self::Name => "name",
            Self::Role => "role",
        };
        write!(f, "{label}")
    }
}

/// Fields the user list is searched on.
pub const USER_SEARCH_FIELDS: &[SearchField] =
    &[SearchField::Name, SearchField::Email, SearchField::Role];

/// Fields the role list is searched on.
pub const ROLE_SEARCH_FIELDS: &[SearchField] = &[SearchField::Name, SearchField::Description];

///
/// Searchable
///
/// Read-side text projection used by [`filter`].
///

pub trait Searchable {
    /// Text of one field, if the record carries it.
    fn field_text(&self, field: SearchField) -> Option<&str>;
}

/// Derive a filtered view of a snapshot.
///
/// A record is included when the lowercased query is a substring of the
/// lowercased text of any selected field. The empty query is the
/// identity; source order is preserved; inclusion is boolean, there is
/// no ranking. Pure: identical inputs always yield the identical view.
pub fn filter<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    fields: &[SearchField],
) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| {
            fields.iter().any(|field| {
                record
                    .field_text(*field)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

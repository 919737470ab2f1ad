//! Inline GraphQL queries

/// Campaign lookup by address
///
/// The id is lowercased; subgraph ids are lowercase hex.
pub fn yeeter_query(yeeter_id: &str) -> String {
    format!(
        "{{yeeter(id: \"{}\") {{id endTime startTime minTribute multiplier goal balance dao {{ id shareTokenSymbol }}}}}}",
        sanitize(&yeeter_id.to_lowercase())
    )
}

/// Newest DAO profile record for a DAO
pub fn dao_profile_query(dao_id: &str) -> String {
    format!(
        "{{records(where: {{ dao: \"{}\", table: \"daoProfile\" }}, orderBy: createdAt, orderDirection: desc) {{id content dao {{ name }} }}}}",
        sanitize(&dao_id.to_lowercase())
    )
}

/// Drop characters that could break out of the string literal
fn sanitize(id: &str) -> String {
    id.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_').collect()
}

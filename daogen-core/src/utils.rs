//! Shared naming helpers for generated members.

/// Convert a string to PascalCase (e.g., "user_id" -> "UserId")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_id" -> "userId")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "UserId" -> "user_id")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Name of the getter generated for a column (e.g., "user_id" -> "getUserId")
pub fn getter_name(column: &str) -> String {
    format!("get{}", to_pascal_case(column))
}

/// Name of the setter generated for a column (e.g., "user_id" -> "setUserId")
pub fn setter_name(column: &str) -> String {
    format!("set{}", to_pascal_case(column))
}

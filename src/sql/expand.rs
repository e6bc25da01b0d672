use crate::{convert::SqlValue, QueryError};

/// Flatten list arguments into their own placeholders.
///
/// Each `?` bound to a [`SqlValue::List`] becomes `?, ?, ...` with one
/// placeholder per element, and the list is spliced into the arguments.
/// `?` inside single-quoted literals is left alone.
///
/// Any other `?` counts as a placeholder, so translated columns must not use
/// a bare `?` operator such as Postgres' jsonb `?`.
pub fn expand_placeholders(sql: &str, args: &[SqlValue]) -> Result<(String, Vec<SqlValue>), QueryError> {
    let mismatch = || QueryError::PlaceholderMismatch {
        placeholders: count_placeholders(sql),
        args: args.len(),
    };

    let mut expanded = String::with_capacity(sql.len());
    let mut flat = Vec::with_capacity(args.len());
    let mut remaining = args.iter();
    let mut quoted = false;

    for ch in sql.chars() {
        match ch {
            '\'' => {
                quoted = !quoted;
                expanded.push(ch);
            }
            '?' if !quoted => match remaining.next() {
                Some(SqlValue::List(values)) => {
                    if values.is_empty() {
                        return Err(QueryError::EmptyList);
                    }
                    expanded.push_str(&vec!["?"; values.len()].join(", "));
                    flat.extend(values.iter().cloned());
                }
                Some(value) => {
                    expanded.push('?');
                    flat.push(value.clone());
                }
                None => return Err(mismatch()),
            },
            _ => expanded.push(ch),
        }
    }

    if remaining.next().is_some() {
        return Err(mismatch());
    }

    Ok((expanded, flat))
}

fn count_placeholders(sql: &str) -> usize {
    let mut quoted = false;
    let mut count = 0;

    for ch in sql.chars() {
        match ch {
            '\'' => quoted = !quoted,
            '?' if !quoted => count += 1,
            _ => {}
        }
    }

    count
}

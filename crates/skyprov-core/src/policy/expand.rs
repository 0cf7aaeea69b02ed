use super::value::PolicyValue;

/// Text form of every item, in descending lexicographic order.
///
/// Configuration sets arrive unordered; sorting gives the same document
/// bytes on every run, so re-applying an unchanged policy is a no-op.
pub fn sorted_descending<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    let mut values: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}

/// [`sorted_descending`] wrapped as a policy list value.
pub fn sorted_value_list<I>(items: I) -> PolicyValue
where
    I: IntoIterator,
    I::Item: ToString,
{
    PolicyValue::text_list(sorted_descending(items))
}

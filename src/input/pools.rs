/// Splits a comma separated pool such as `"10,,12"`.
///
/// Blank slots become `None`. Text that is not a number is kept as a present
/// NaN so validation can report it against its slot.
pub fn parse_pool(text: &str) -> Vec<Option<f64>> {
    text.split(',')
        .map(|field| {
            let field = field.trim();
            if field.is_empty() {
                None
            } else {
                Some(field.parse::<f64>().unwrap_or(f64::NAN))
            }
        })
        .collect()
}

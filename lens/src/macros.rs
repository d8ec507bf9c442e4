/// Build a labeled lens for a single named field of a `Clone` struct.
///
/// The getter clones the field. The setter rebuilds the struct with struct
/// update syntax over a clone of the input, so fields held behind `Arc` stay
/// shared with the original. The type may be given as a path
/// (`field_lens!(profile::Address, city)`); the label is then the path as
/// written.
///
/// ```rust
/// use lens::field_lens;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Address {
///     city: String,
///     zip: String,
/// }
///
/// let city = field_lens!(Address, city);
/// let home = Address { city: "Wonderland".into(), zip: "12345".into() };
///
/// assert_eq!(city.view(&home), "Wonderland");
/// assert_eq!(city.set("Oz".into(), &home).city, "Oz");
/// assert_eq!(home.city, "Wonderland");
/// ```
#[macro_export]
macro_rules! field_lens {
    ($ty:path, $field:ident) => {
        $crate::Lens::labeled(
            concat!(stringify!($ty), ".", stringify!($field)),
            |state: &$ty| ::core::clone::Clone::clone(&state.$field),
            |value, state: &$ty| {
                type __FieldLensTarget = $ty;
                __FieldLensTarget {
                    $field: value,
                    ..::core::clone::Clone::clone(state)
                }
            },
        )
    };
}

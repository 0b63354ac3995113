/// Construct a [`Bson`](crate::Bson) value from a literal.
///
/// ```rust
/// use bson_extjson::bson;
///
/// let value = bson!({
///     "name": "mongo",
///     "tags": ["db", 1, null, { "nested": true }],
/// });
/// ```
#[macro_export]
macro_rules! bson {
    //////////////////////////////////////////////////////////////////////////
    // TT muncher for parsing the inside of an array [...]. Produces a vec![...]
    // of the elements.
    //
    // Must be invoked as: bson!(@array [] $($tt)*)
    //////////////////////////////////////////////////////////////////////////

    // Done with trailing comma.
    (@array [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };

    // Done without trailing comma.
    (@array [$($elems:expr),*]) => {
        ::std::vec![$($elems),*]
    };

    // Next element is `null`.
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::bson!(@array [$($elems,)* $crate::bson!(null)] $($rest)*)
    };

    // Next element is an array.
    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::bson!(@array [$($elems,)* $crate::bson!([$($array)*])] $($rest)*)
    };

    // Next element is a document.
    (@array [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::bson!(@array [$($elems,)* $crate::bson!({$($map)*})] $($rest)*)
    };

    // Next element is an expression followed by comma.
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::bson!(@array [$($elems,)* $crate::bson!($next),] $($rest)*)
    };

    // Last element is an expression with no trailing comma.
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::bson!(@array [$($elems,)* $crate::bson!($last)])
    };

    // Comma after the most recent element.
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::bson!(@array [$($elems,)*] $($rest)*)
    };

    //////////////////////////////////////////////////////////////////////////
    // The main implementation.
    //
    // Must be invoked as: bson!($($bson)+)
    //////////////////////////////////////////////////////////////////////////

    (null) => {
        $crate::Bson::Null
    };

    ([]) => {
        $crate::Bson::Array(::std::vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Bson::Array($crate::bson!(@array [] $($tt)+))
    };

    ({ $($tt:tt)* }) => {
        $crate::Bson::Document($crate::doc!{ $($tt)* })
    };

    ($other:expr) => {
        $crate::Bson::from($other)
    };
}

/// Construct a [`Document`](crate::Document) from a literal. Keys must be string literals or
/// parenthesized expressions.
///
/// ```rust
/// use bson_extjson::doc;
///
/// let key = "computed";
/// let doc = doc! {
///     "x": 5,
///     (key): { "inner": [1.5, "two"] },
///     "nothing": null,
/// };
/// assert_eq!(doc.len(), 3);
/// ```
#[macro_export]
macro_rules! doc {
    (@doc $doc:ident) => {};

    (@doc $doc:ident $key:tt : null $(, $($rest:tt)*)?) => {
        $doc.insert($key, $crate::Bson::Null);
        $crate::doc!(@doc $doc $($($rest)*)?);
    };

    (@doc $doc:ident $key:tt : [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $doc.insert($key, $crate::bson!([$($array)*]));
        $crate::doc!(@doc $doc $($($rest)*)?);
    };

    (@doc $doc:ident $key:tt : {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $doc.insert($key, $crate::bson!({$($map)*}));
        $crate::doc!(@doc $doc $($($rest)*)?);
    };

    (@doc $doc:ident $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $doc.insert($key, $crate::bson!($value));
        $crate::doc!(@doc $doc $($($rest)*)?);
    };

    () => {
        $crate::Document::new()
    };

    ( $($tt:tt)+ ) => {{
        let mut document = $crate::Document::new();
        $crate::doc!(@doc document $($tt)+);
        document
    }};
}

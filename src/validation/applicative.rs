//! Fixed-arity applicative combinators, `map2`..`map8` and `flat_map2`..`flat_map8`.
//!
//! Every argument is an independent, already-evaluated [`Validation`]. If all
//! of them are valid the function runs once with their values. If any is
//! invalid the function never runs and the result carries the errors of
//! *every* invalid argument, concatenated in argument order.
//!
//! # Examples
//!
//! ```
//! use field_rail::{map3, Validation};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     email: String,
//! }
//!
//! let person = map3(
//!     Validation::valid("hugh".to_string()).at("name"),
//!     Validation::<u32>::invalid_message("must.be.positive").at("age"),
//!     Validation::<String>::invalid_message("must.contain.at").at("email"),
//!     |name, age, email| Person { name, age, email },
//! );
//!
//! assert_eq!(
//!     person.rendered_errors(),
//!     vec!["age.must.be.positive", "email.must.contain.at"]
//! );
//! ```
use crate::types::{ErrorMessage, ErrorVec};
use crate::validation::core::Validation;

macro_rules! impl_map_n {
    ($arity:literal, $map:ident, $flat_map:ident; $($v:ident: $t:ident => $a:ident),+) => {
        #[doc = concat!(
            "Combines ", stringify!($arity), " independent validations with `f`, ",
            "accumulating the errors of every invalid argument in argument order."
        )]
        #[inline]
        pub fn $map<$($t,)+ R, F>($($v: Validation<$t>,)+ f: F) -> Validation<R>
        where
            F: FnOnce($($t),+) -> R,
        {
            $flat_map($($v,)+ |$($a),+| Validation::Valid(f($($a),+)))
        }

        #[doc = concat!(
            "Like [`", stringify!($map), "`], but `f` returns a validation that is ",
            "returned as-is when all ", stringify!($arity), " arguments are valid."
        )]
        #[inline]
        pub fn $flat_map<$($t,)+ R, F>($($v: Validation<$t>,)+ f: F) -> Validation<R>
        where
            F: FnOnce($($t),+) -> Validation<R>,
        {
            match ($($v,)+) {
                ($(Validation::Valid($a),)+) => f($($a),+),
                ($($v,)+) => {
                    let mut errors: ErrorVec<ErrorMessage> = ErrorVec::new();
                    $(
                        if let Validation::Invalid(more) = $v {
                            errors.extend(more);
                        }
                    )+
                    Validation::Invalid(errors)
                }
            }
        }
    };
}

impl_map_n!(2, map2, flat_map2; v1: A => a, v2: B => b);
impl_map_n!(3, map3, flat_map3; v1: A => a, v2: B => b, v3: C => c);
impl_map_n!(4, map4, flat_map4; v1: A => a, v2: B => b, v3: C => c, v4: D => d);
impl_map_n!(5, map5, flat_map5; v1: A => a, v2: B => b, v3: C => c, v4: D => d, v5: E => e);
impl_map_n!(
    6, map6, flat_map6;
    v1: A => a, v2: B => b, v3: C => c, v4: D => d, v5: E => e, v6: G => g
);
impl_map_n!(
    7, map7, flat_map7;
    v1: A => a, v2: B => b, v3: C => c, v4: D => d, v5: E => e, v6: G => g, v7: H => h
);
impl_map_n!(
    8, map8, flat_map8;
    v1: A => a, v2: B => b, v3: C => c, v4: D => d, v5: E => e, v6: G => g, v7: H => h,
    v8: J => j
);

//! Assertion functions taking an explicit test context.
//!
//! Every assertion comes in two forms. The plain form records a failure and
//! lets the test continue; the `_now` form also stops the test. Both return
//! the failure as an [`AssertionError`](crate::AssertionError).

mod equal;
mod errors;
mod map;
mod order;
mod panic;
mod regexp;
mod slice;
mod string;
mod truth;

pub use equal::{
    deep_equal, deep_equal_now, equal, equal_now, float_equal, float_equal_now, float_not_equal,
    float_not_equal_now, not_deep_equal, not_deep_equal_now, not_equal, not_equal_now,
};
pub use errors::{is_error, is_error_now, not_is_error, not_is_error_now};
pub use map::{
    map_has_key, map_has_key_now, map_has_value, map_has_value_now, not_map_has_key,
    not_map_has_key_now, not_map_has_value, not_map_has_value_now,
};
pub use order::{gt, gt_now, gte, gte_now, lt, lt_now, lte, lte_now};
pub use panic::{
    not_panic, not_panic_now, not_panic_of, not_panic_of_now, panic, panic_now, panic_of,
    panic_of_now,
};
pub use regexp::{
    is_match, is_match_now, match_string, match_string_now, not_match, not_match_now,
    not_match_string, not_match_string_now,
};
pub use slice::{
    contains_element, contains_element_now, not_contains_element, not_contains_element_now,
};
pub use string::{
    contains_string, contains_string_now, has_prefix, has_prefix_now, has_suffix, has_suffix_now,
    not_contains_string, not_contains_string_now, not_has_prefix, not_has_prefix_now,
    not_has_suffix, not_has_suffix_now,
};
pub use truth::{is_true, is_true_now, nil, nil_now, not_nil, not_nil_now, not_true, not_true_now};

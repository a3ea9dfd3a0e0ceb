//! Minimal claim codec
//!
//! Header and claim bodies use a narrow, flat object grammar: a single line of
//! `"name":value` members inside braces with no whitespace, no escaping, no
//! nesting, no arrays and no null. The decoder accepts exactly what the
//! encoder emits. It is not a general JSON implementation.

mod decoder;
mod encoder;

pub use decoder::decode_into;
pub use encoder::encode;

/// How the decoder treats unquoted values it cannot type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Drop integer members that fail to parse and accept any boolean-looking
    /// value, matching tokens produced by earlier implementations.
    #[default]
    Lenient,

    /// Reject unparseable integers and inexact boolean literals.
    Strict,
}

//! Fallback path: scalars render through their `Display` form.
//!
//! Obfuscation only applies to textual values, so these ignore the context.

use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
};

use super::impl_markdown_encode_display;

impl_markdown_encode_display!(bool, char);

// Signed integers
impl_markdown_encode_display!(i8, i16, i32, i64, i128, isize);

// Unsigned integers
impl_markdown_encode_display!(u8, u16, u32, u64, u128, usize);

// Floating point
impl_markdown_encode_display!(f32, f64);

impl_markdown_encode_display!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl_markdown_encode_display!(
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
);

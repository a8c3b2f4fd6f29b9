//! Sequences and maps, rendered inline.
//!
//! Elements, keys and values are encoded with the enclosing context, so an
//! obfuscated `Vec<String>` masks every element. Sequences render as
//! `[a b c]` and maps as `map[k:v k2:v2]`, in key order.

use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    hash::BuildHasher,
};

use crate::{
    encoder::{Context, MarkdownEncode},
    error::Result,
};

fn encode_sequence<'a, T, I>(items: I, ctx: Context) -> Result<String>
where
    T: MarkdownEncode + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let encoded = items
        .into_iter()
        .map(|item| item.encode_with(ctx))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("[{}]", encoded.join(" ")))
}

fn encode_entries<'a, K, V, I>(entries: I, ctx: Context) -> Result<String>
where
    K: MarkdownEncode + 'a,
    V: MarkdownEncode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let body = entries
        .into_iter()
        .map(|(key, value)| -> Result<String> {
            Ok(format!(
                "{}:{}",
                key.encode_with(ctx)?,
                value.encode_with(ctx)?
            ))
        })
        .collect::<Result<Vec<_>>>()?
        .join(" ");
    Ok(format!("map[{body}]"))
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> MarkdownEncode for [T]
where
    T: MarkdownEncode,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        encode_sequence(self, ctx)
    }
}

impl<T, const N: usize> MarkdownEncode for [T; N]
where
    T: MarkdownEncode,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        encode_sequence(self, ctx)
    }
}

impl<T> MarkdownEncode for Vec<T>
where
    T: MarkdownEncode,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        encode_sequence(self, ctx)
    }
}

impl<T> MarkdownEncode for VecDeque<T>
where
    T: MarkdownEncode,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        encode_sequence(self, ctx)
    }
}

// =============================================================================
// Maps
// =============================================================================

impl<K, V> MarkdownEncode for BTreeMap<K, V>
where
    K: MarkdownEncode,
    V: MarkdownEncode,
{
    fn encode_with(&self, ctx: Context) -> Result<String> {
        encode_entries(self, ctx)
    }
}

impl<K, V, S> MarkdownEncode for HashMap<K, V, S>
where
    K: MarkdownEncode + Ord,
    V: MarkdownEncode,
    S: BuildHasher,
{
    // Sorted by key so output matches the equivalent `BTreeMap`.
    fn encode_with(&self, ctx: Context) -> Result<String> {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        encode_entries(entries, ctx)
    }
}

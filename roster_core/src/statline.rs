//! Statline resolution - applying stat and trait modifiers to base values
//!
//! Stat values are short display tokens (`"3"`, `"4+"`, `"5\""`). Arithmetic
//! works on the leading integer; the suffix is preserved from the original
//! token. Direction depends on metadata: for inverted stats (roll targets
//! like WS) a lower number is better, so `improve` decrements; for plain
//! stats `improve` increments.

use crate::fighter::FighterType;
use crate::metadata::{ModContext, StatMetadataRegistry};
use gear_core::modifier::{Modifier, StatModifier, StatModifierMode, TraitModifierMode};
use serde::{Deserialize, Serialize};

/// One display row of a resolved statline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStat {
    pub field: String,
    pub label: String,
    pub value: String,
    /// Final value differs from the unmodified base value
    pub is_modified: bool,
}

/// Split a stat token into its leading integer and suffix
///
/// `"4+"` -> `(4, "+")`, `"5\""` -> `(5, "\"")`, `"3"` -> `(3, "")`.
/// Tokens without a leading integer (`"-"`, `"*"`) are not modifiable.
pub fn parse_token(token: &str) -> Option<(i64, &str)> {
    let digits_end = token
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    let value: i64 = token[..digits_end].parse().ok()?;
    Some((value, &token[digits_end..]))
}

/// Rebuild a token from its numeric part and preserved suffix
pub fn format_token(value: i64, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

/// Apply one stat modifier to a running value
///
/// Unknown stat (no metadata) or a non-numeric token leaves the value
/// unchanged; a broken modifier must not block roster display.
fn apply_stat_modifier(current: &str, modifier: &StatModifier, ctx: &mut ModContext<'_>) -> String {
    let Some(meta) = ctx.get(&modifier.stat) else {
        return current.to_string();
    };

    match modifier.mode {
        StatModifierMode::Set => modifier.value.clone(),
        StatModifierMode::Improve | StatModifierMode::Worsen => {
            let Some(amount) = modifier.amount() else {
                return current.to_string();
            };
            let Some((value, suffix)) = parse_token(current) else {
                return current.to_string();
            };

            let better_is_down = meta.is_inverted;
            let delta = match (modifier.mode, better_is_down) {
                (StatModifierMode::Improve, true) => -amount,
                (StatModifierMode::Improve, false) => amount,
                (StatModifierMode::Worsen, true) => amount,
                (StatModifierMode::Worsen, false) => -amount,
                (StatModifierMode::Set, _) => unreachable!(),
            };
            format_token(value + delta, suffix)
        }
    }
}

/// Resolve a fighter type's displayed statline under the active modifiers
///
/// Modifiers apply in gather order (assignment order, stable). Metadata is
/// fetched once per field through a fresh [`ModContext`].
pub fn resolve_statline(
    fighter_type: &FighterType,
    modifiers: &[&Modifier],
    registry: &StatMetadataRegistry,
) -> Vec<ResolvedStat> {
    let mut ctx = ModContext::new(registry);
    let mut resolved = Vec::with_capacity(fighter_type.statline.len());

    for entry in &fighter_type.statline {
        let mut value = entry.value.clone();
        for modifier in modifiers {
            if let Modifier::Stat(stat_mod) = modifier {
                if stat_mod.stat == entry.field {
                    value = apply_stat_modifier(&value, stat_mod, &mut ctx);
                }
            }
        }

        let label = ctx
            .get(&entry.field)
            .map(|m| m.label.clone())
            .unwrap_or_else(|| entry.field.clone());
        let is_modified = value != entry.value;

        resolved.push(ResolvedStat {
            field: entry.field.clone(),
            label,
            value,
            is_modified,
        });
    }

    resolved
}

/// Resolve a base trait list under the active trait modifiers
///
/// `add` inserts if absent, `remove` deletes if present; application order
/// is gather order, so re-adding after removal (or vice versa) reflects the
/// last operation.
pub fn resolve_traits(base: &[String], modifiers: &[&Modifier]) -> Vec<String> {
    let mut traits: Vec<String> = base.to_vec();
    for modifier in modifiers {
        if let Modifier::Trait(trait_mod) = modifier {
            match trait_mod.mode {
                TraitModifierMode::Add => {
                    if !traits.contains(&trait_mod.trait_name) {
                        traits.push(trait_mod.trait_name.clone());
                    }
                }
                TraitModifierMode::Remove => {
                    traits.retain(|t| t != &trait_mod.trait_name);
                }
            }
        }
    }
    traits
}

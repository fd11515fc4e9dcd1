// gsw: GitLab merge request and to-do reports
//
// SPDX-FileCopyrightText: 2026 gsw contributors
// SPDX-License-Identifier: GPL-2.0-or-later

//! Closed field vocabularies.
//!
//! Each object declares its fields with [`field_vocabulary!`], which yields an
//! enum, its name table, and a [`Field`] impl. User input is validated once, in
//! [`parse_fields`], before any handler touches the network.

use crate::error::FieldError;

/// A field of some object's vocabulary.
pub trait Field: Copy + Eq + Sized + 'static {
    /// Object the vocabulary belongs to (`mr`, `todo`).
    const OBJECT: &'static str;

    /// Every field, in declaration order.
    const ALL: &'static [Self];

    /// Columns shown when `--fields` is not given.
    const DEFAULT: &'static [Self];

    /// Name as typed on the command line.
    fn name(self) -> &'static str;

    /// Looks a name up in the vocabulary.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Comma-separated list of every field name.
    #[must_use]
    fn available() -> String {
        Self::ALL
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validates user-supplied field names, keeping their order.
///
/// # Errors
///
/// Returns [`FieldError::UnknownField`] for the first name outside the
/// vocabulary.
pub fn parse_fields<F: Field>(names: &[String]) -> Result<Vec<F>, FieldError> {
    names
        .iter()
        .map(|name| {
            F::from_name(name).ok_or_else(|| FieldError::UnknownField {
                object: F::OBJECT,
                field: name.clone(),
                available: F::available(),
            })
        })
        .collect()
}

/// Declares a field enum for one object.
///
/// ```text
/// field_vocabulary! {
///     /// docs
///     pub enum TodoField for "todo" {
///         Id => "id",
///         ...
///     }
///     default: [Id, ...]
/// }
/// ```
macro_rules! field_vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $object:literal {
            $($variant:ident => $field:literal),+ $(,)?
        }
        default: [$($default:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::output::fields::Field for $name {
            const OBJECT: &'static str = $object;
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const DEFAULT: &'static [Self] = &[$(Self::$default),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $field),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::output::fields::Field::name(*self))
            }
        }
    };
}

pub(crate) use field_vocabulary;

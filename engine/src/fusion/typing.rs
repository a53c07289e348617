//! Combined typing of a fusion

/// Derive the typing of a fusion from its two sources.
///
/// The fusion keeps `first`'s primary type. Its secondary type comes from
/// `second`, falling back whenever the obvious choice would repeat the
/// primary:
///
/// - `second` dual-typed: its secondary type, or its primary type if the
///   secondary collides, or nothing if both collide.
/// - `second` mono-typed: its type, or (on collision) `first`'s own
///   secondary type, or nothing.
///
/// A secondary type equal to its own primary counts as absent. The result
/// never lists the same type twice. Not commutative.
pub fn resolve_fusion_typing<T>(first: (T, Option<T>), second: (T, Option<T>)) -> (T, Option<T>)
where
    T: PartialEq + Copy,
{
    let (primary, first_secondary) = normalize(first);
    let (second_primary, second_secondary) = normalize(second);

    let secondary = match second_secondary {
        Some(secondary) if secondary != primary => Some(secondary),
        Some(_) => Some(second_primary).filter(|t| *t != primary),
        None if second_primary != primary => Some(second_primary),
        None => first_secondary,
    };

    (primary, secondary)
}

fn normalize<T: PartialEq + Copy>((primary, secondary): (T, Option<T>)) -> (T, Option<T>) {
    (primary, secondary.filter(|t| *t != primary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type::{self, *};

    fn resolve(first: (Type, Option<Type>), second: (Type, Option<Type>)) -> (Type, Option<Type>) {
        resolve_fusion_typing(first, second)
    }

    #[test]
    fn test_primary_always_from_first() {
        assert_eq!(resolve((Fire, None), (Water, None)).0, Fire);
        assert_eq!(resolve((Water, None), (Fire, None)).0, Water);
    }

    #[test]
    fn test_second_dual_uses_its_secondary() {
        // Charizard + Swampert
        assert_eq!(
            resolve((Fire, Some(Flying)), (Water, Some(Ground))),
            (Fire, Some(Ground))
        );
    }

    #[test]
    fn test_second_secondary_collides_uses_its_primary() {
        // Tornadus + Gyarados: Gyarados' Flying would repeat the primary
        assert_eq!(
            resolve((Flying, None), (Water, Some(Flying))),
            (Flying, Some(Water))
        );
    }

    #[test]
    fn test_second_mono_different_type() {
        assert_eq!(resolve((Grass, Some(Poison)), (Fire, None)), (Grass, Some(Fire)));
    }

    #[test]
    fn test_second_mono_same_type_falls_back_to_first_secondary() {
        assert_eq!(
            resolve((Grass, Some(Poison)), (Grass, None)),
            (Grass, Some(Poison))
        );
        assert_eq!(resolve((Grass, None), (Grass, None)), (Grass, None));
    }

    #[test]
    fn test_degenerate_inputs_treated_as_mono() {
        assert_eq!(resolve((Fire, Some(Fire)), (Fire, Some(Fire))), (Fire, None));
        assert_eq!(resolve((Fire, None), (Water, Some(Water))), (Fire, Some(Water)));
    }

    #[test]
    fn test_not_commutative() {
        let a = (Fire, Some(Flying));
        let b = (Water, Some(Ground));
        assert_ne!(resolve(a, b), resolve(b, a));
        assert_eq!(resolve(b, a), (Water, Some(Flying)));
    }

    #[test]
    fn test_never_repeats_a_type() {
        let options: Vec<Option<Type>> = std::iter::once(None)
            .chain(Type::ALL.into_iter().map(Some))
            .collect();

        for a1 in Type::ALL {
            for &a2 in &options {
                for b1 in Type::ALL {
                    for &b2 in &options {
                        let (primary, secondary) = resolve((a1, a2), (b1, b2));
                        assert_eq!(primary, a1);
                        assert_ne!(secondary, Some(primary), "{a1:?}/{a2:?} + {b1:?}/{b2:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_works_with_type_names() {
        assert_eq!(
            resolve_fusion_typing(("Unknown", None), ("Fire", Some("Unknown"))),
            ("Unknown", Some("Fire"))
        );
    }
}

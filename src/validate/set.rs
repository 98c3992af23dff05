use indexmap::IndexMap;
use tracing::debug;

use super::{Rule, Validatable, ValidatorConfig, ValidatorKind, Validity};
use crate::options::Messages;

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub config: ValidatorConfig,
    pub rule: Rule,
    pub message: String,
}

impl Registration {
    pub fn is_enabled(&self) -> bool {
        self.rule.is_enabled()
    }
}

/// Validator registrations of one control, keyed by kind.
#[derive(Debug, Clone)]
pub struct ValidatorSet {
    supported: &'static [ValidatorKind],
    entries: IndexMap<ValidatorKind, Registration>,
}

impl ValidatorSet {
    pub fn new(supported: &'static [ValidatorKind]) -> Self {
        Self {
            supported,
            entries: IndexMap::new(),
        }
    }

    pub fn supports(&self, kind: ValidatorKind) -> bool {
        self.supported.contains(&kind)
    }

    /// Upserts `kind`. Returns `false` when the kind does not apply to this
    /// control; the set is left untouched in that case.
    pub fn register(
        &mut self,
        kind: ValidatorKind,
        config: ValidatorConfig,
        messages: &Messages,
    ) -> bool {
        if !self.supports(kind) {
            debug!(%kind, "ignoring validator not supported by this control");
            return false;
        }
        let rule = kind.compile(&config.param);
        if !rule.is_enabled() && !config.param.is_unset() {
            debug!(%kind, param = ?config.param, "validator parameter disables the rule");
        }
        let bound = match rule {
            Rule::MinLength(bound) | Rule::MaxLength(bound) => Some(bound),
            _ => None,
        };
        let message = config
            .message
            .clone()
            .unwrap_or_else(|| messages.for_kind(kind, bound));
        self.entries.insert(
            kind,
            Registration {
                config,
                rule,
                message,
            },
        );
        true
    }

    pub fn get(&self, kind: ValidatorKind) -> Option<&Registration> {
        self.entries.get(&kind)
    }

    /// Registrations in the order they were first made.
    pub fn iter(&self) -> impl Iterator<Item = (ValidatorKind, &Registration)> {
        self.entries.iter().map(|(kind, entry)| (*kind, entry))
    }

    pub fn any_enabled(&self) -> bool {
        self.entries.values().any(Registration::is_enabled)
    }

    /// Runs the pipeline in fixed order and stops at the first failure.
    pub fn evaluate<V: Validatable + ?Sized>(&self, value: &V) -> Validity {
        ValidatorKind::PIPELINE
            .iter()
            .filter_map(|kind| self.entries.get(kind))
            .find(|entry| !entry.rule.passes(value))
            .map_or(Validity::Valid, |entry| {
                Validity::Invalid(entry.message.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD_KINDS: &[ValidatorKind] = &ValidatorKind::PIPELINE;

    fn field_set() -> ValidatorSet {
        ValidatorSet::new(FIELD_KINDS)
    }

    #[test]
    fn empty_set_is_valid() {
        let set = field_set();
        assert_eq!(set.evaluate(&String::new()), Validity::Valid);
        assert!(!set.any_enabled());
    }

    #[test]
    fn order_is_fixed_regardless_of_registration_order() {
        let messages = Messages::default();
        let mut set = field_set();
        set.register(
            ValidatorKind::Email,
            ValidatorConfig::new(true).with_message("bad email"),
            &messages,
        );
        set.register(
            ValidatorKind::Min,
            ValidatorConfig::new(10).with_message("too short"),
            &messages,
        );
        assert_eq!(
            set.evaluate(&"abc".to_string()),
            Validity::Invalid("too short".to_string())
        );
        let order: Vec<_> = set.iter().map(|(kind, _)| kind).collect();
        assert_eq!(order, vec![ValidatorKind::Email, ValidatorKind::Min]);
    }

    #[test]
    fn re_registering_replaces_bound_and_message() {
        let messages = Messages::default();
        let mut set = field_set();
        set.register(ValidatorKind::Min, ValidatorConfig::new(8), &messages);
        set.register(ValidatorKind::Min, ValidatorConfig::new(2), &messages);
        let entry = set.get(ValidatorKind::Min).expect("min registered");
        assert_eq!(entry.rule, Rule::MinLength(2));
        assert_eq!(entry.message, "Please enter at least 2 characters.");
        assert_eq!(set.evaluate(&"abc".to_string()), Validity::Valid);
    }

    #[test]
    fn unsupported_kinds_are_ignored() {
        let mut set = ValidatorSet::new(&[ValidatorKind::Required]);
        assert!(!set.register(
            ValidatorKind::Email,
            ValidatorConfig::new(true),
            &Messages::default()
        ));
        assert!(set.get(ValidatorKind::Email).is_none());
    }

    #[test]
    fn disabled_registration_does_not_turn_validation_on() {
        let mut set = field_set();
        set.register(
            ValidatorKind::Required,
            ValidatorConfig::new("false"),
            &Messages::default(),
        );
        assert!(!set.any_enabled());
        assert_eq!(set.evaluate(&String::new()), Validity::Valid);
    }
}

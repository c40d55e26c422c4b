use crate::conf::codec::options;
use crate::conf::draft::{OptionsDraft, RawOptions};
use crate::conf::error::ValidationError;
use crate::conf::paths;
use crate::conf::types::{CheckerKind, CheckerVariant, ProtocolOptions};
use crate::conf::validation::ValidationCtx;
use crate::conf::variant::{Tagged, VariantSlot};

/// The active checker must have its payload and no other checker may have one.
pub fn validate_checker(
    slot: &VariantSlot<CheckerVariant>,
    ctx: &mut ValidationCtx,
) -> CheckerVariant {
    let active = slot.active();

    // One error per orphaned checker object.
    for orphan in slot.orphans() {
        ctx.invalid(
            orphan.object_path(),
            ValidationError::OrphanedVariant {
                orphan: orphan.to_string(),
                active: active.to_string(),
            },
        );
    }

    if !slot.contains(active) {
        match active.payload_path() {
            Some(path) => ctx.invalid(path, ValidationError::Required),
            None => return CheckerVariant::empty(active),
        }
    }

    let (_, checker) = slot.resolve(CheckerKind::default());
    checker
}

/// The active options payload, when present, must decode.
pub fn validate_options(
    slot: &VariantSlot<OptionsDraft>,
    ctx: &mut ValidationCtx,
) -> ProtocolOptions {
    let active = slot.active();

    for orphan in slot.orphans() {
        ctx.invalid(
            orphan.option_field(),
            ValidationError::OrphanedVariant {
                orphan: orphan.option_field().to_owned(),
                active: active.to_string(),
            },
        );
    }

    // A missing candidate means no options were given for the selected protocol.
    let (protocol, draft) = slot.resolve(active);
    let payload = match draft.raw {
        None => None,
        Some(RawOptions::Structured(value)) => Some(value),
        Some(RawOptions::Text(text)) => match options::decode_optional(&text) {
            Ok(value) => value,
            Err(e) => {
                ctx.parse_error(paths::PROTO_OPTION, e);
                None
            }
        },
    };

    ProtocolOptions::new(protocol, payload)
}

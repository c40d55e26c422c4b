use crate::conf::error::ParseError;
use crate::conf::types::Address;

/// Parse `host:port`, splitting on the last `:`.
///
/// The port must be canonical decimal (no sign, no leading zeros), so
/// `format(parse(text)) == text` for every accepted text.
pub fn parse(text: &str) -> Result<Address, ParseError> {
    let Some((host, port)) = text.rsplit_once(':') else {
        return Err(ParseError::MissingPortSeparator {
            text: text.to_owned(),
        });
    };

    let canonical = !port.is_empty()
        && port.bytes().all(|b| b.is_ascii_digit())
        && !(port.len() > 1 && port.starts_with('0'));
    if !canonical {
        return Err(ParseError::InvalidPort {
            port: port.to_owned(),
        });
    }

    // Only digits are left, so a failed parse means overflow.
    let port = port
        .parse::<u16>()
        .map_err(|_| ParseError::PortOutOfRange {
            port: port.to_owned(),
        })?;

    Ok(Address::new(host, port))
}

pub fn format(address: &Address) -> String {
    format!("{}:{}", address.host, address.port)
}

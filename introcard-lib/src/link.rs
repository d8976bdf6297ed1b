//! Turning contact details into navigable addresses.
//!
//! Addresses are built from fixed templates and then checked. Social links use
//! `https://{platform}.com/{username}`, taking the platform name as the domain without
//! looking it up anywhere. A link that fails the check is still shown, just not as a
//! link.

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLink {
    #[error("'{address}' contains {character:?}, which is not allowed in a URL")]
    IllegalCharacter { address: String, character: char },
    #[error("'{address}' contains a malformed percent escape")]
    MalformedEscape { address: String },
    #[error("'{address}' is not a URL: {source}")]
    Unparseable {
        address: String,
        source: url::ParseError,
    },
    #[error("'{address}' has no host")]
    MissingHost { address: String },
    #[error("'{address}' points at {host:?} instead of the platform's site")]
    ForeignHost {
        address: String,
        host: Option<String>,
    },
}

pub fn mail_address(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn social_address(platform: &str, username: &str) -> String {
    format!("https://{platform}.com/{username}")
}

/// Resolve the address of a social account.
///
/// On top of [`resolve_link`], the parsed host must be `{platform}.com`, ignoring ASCII
/// case. A platform holding URL delimiters or escapes would otherwise end up as part of
/// another host, path or userinfo.
pub fn resolve_social_link(platform: &str, username: &str) -> Result<Url, InvalidLink> {
    let address = social_address(platform, username);
    let url = resolve_link(&address)?;
    let expected = format!("{platform}.com");

    match url.host_str() {
        Some(host) if host.eq_ignore_ascii_case(&expected) => Ok(url),
        host => Err(InvalidLink::ForeignHost {
            host: host.map(str::to_string),
            address,
        }),
    }
}

/// Check an address and parse it into a [`Url`].
///
/// Characters that would have to be percent encoded make the address invalid instead of
/// being encoded on the fly. Hierarchical URLs also need a host. This never panics.
pub fn resolve_link(address: &str) -> Result<Url, InvalidLink> {
    check_characters(address)?;

    let url = Url::parse(address).map_err(|source| InvalidLink::Unparseable {
        address: address.to_string(),
        source,
    })?;

    // `mailto:` and friends have no host to speak of
    if !url.cannot_be_a_base() && url.host().is_none() {
        return Err(InvalidLink::MissingHost {
            address: address.to_string(),
        });
    }

    Ok(url)
}

fn check_characters(address: &str) -> Result<(), InvalidLink> {
    let mut chars = address.chars();

    while let Some(character) = chars.next() {
        if character == '%' {
            let hex_digits = chars.clone().take(2).filter(char::is_ascii_hexdigit).count();
            if hex_digits != 2 {
                return Err(InvalidLink::MalformedEscape {
                    address: address.to_string(),
                });
            }
        } else if !is_url_character(character) {
            return Err(InvalidLink::IllegalCharacter {
                address: address.to_string(),
                character,
            });
        }
    }

    Ok(())
}

/// Printable ASCII minus the characters RFC 3986 never allows unescaped.
fn is_url_character(character: char) -> bool {
    character.is_ascii_graphic()
        && !matches!(
            character,
            '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}'
        )
}

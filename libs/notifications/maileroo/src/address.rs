//! Mailbox to API address conversion.

use crate::models::Address;
use crate::payload::EmailAddress;

/// Map a single mailbox. An empty display name is treated as absent.
pub fn map_address(address: &Address) -> EmailAddress {
    let name = address
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    EmailAddress::new(address.email.clone(), name)
}

/// Map a list of mailboxes, preserving order.
pub fn map_addresses(addresses: &[Address]) -> Vec<EmailAddress> {
    addresses.iter().map(map_address).collect()
}

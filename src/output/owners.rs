//! Owner and group name resolution

use std::collections::HashMap;

use nix::unistd::{Gid, Group, Uid, User};
use tracing::debug;

/// Resolves numeric ids through the user and group databases, caching results.
///
/// Ids without a record (or whose lookup fails) render as the decimal id.
#[derive(Debug, Default)]
pub struct OwnerNames {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl OwnerNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&mut self, uid: u32) -> &str {
        self.users
            .entry(uid)
            .or_insert_with(|| match User::from_uid(Uid::from_raw(uid)) {
                Ok(Some(user)) => user.name,
                Ok(None) => uid.to_string(),
                Err(e) => {
                    debug!("user lookup for {} failed: {}", uid, e);
                    uid.to_string()
                }
            })
    }

    pub fn group(&mut self, gid: u32) -> &str {
        self.groups
            .entry(gid)
            .or_insert_with(|| match Group::from_gid(Gid::from_raw(gid)) {
                Ok(Some(group)) => group.name,
                Ok(None) => gid.to_string(),
                Err(e) => {
                    debug!("group lookup for {} failed: {}", gid, e);
                    gid.to_string()
                }
            })
    }
}

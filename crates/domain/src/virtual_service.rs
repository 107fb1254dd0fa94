use super::name;

/// The closed set of virtual services, selected by the leftmost label of the
/// queried name. Adding a service means adding a variant here plus one match
/// arm in the dispatcher; the dispatcher itself carries no per-service logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualService {
    Time,
    Whoami,
}

impl VirtualService {
    /// Select the service addressed by an already-lowercased owner name.
    /// `None` is the unrecognized case (NXDOMAIN within an owned zone).
    pub fn from_name(normalized_name: &str) -> Option<Self> {
        match name::leftmost_label(normalized_name)? {
            "time" => Some(VirtualService::Time),
            "whoami" => Some(VirtualService::Whoami),
            _ => None,
        }
    }
}

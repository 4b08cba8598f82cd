use std::cmp::Ordering;

use crate::{error::Error, label::Labels};

/// Names starting with this are local labels, referenced as `name+`/`name-`.
pub const LOCAL_MARKER: char = '!';

/// Render `target` as seen from address `at`: the label name when a visible
/// label sits there, otherwise a hex literal of `digits` digits.
pub fn resolve(labels: &Labels, target: u16, at: u16, digits: usize) -> Result<String, Error> {
    match labels.get(target) {
        Some(label) if label.visible => {
            if label.name.starts_with(LOCAL_MARKER) {
                local(labels, target, &label.name, at)
            } else {
                Ok(label.name.clone())
            }
        }
        _ => Ok(hex(target, digits)),
    }
}

pub fn hex(value: u16, digits: usize) -> String {
    format!("${:0width$x}", value, width = digits)
}

fn suffixed(name: &str, addr: u16, at: u16) -> String {
    match at.cmp(&addr) {
        Ordering::Greater => format!("{}-", name),
        Ordering::Less => format!("{}+", name),
        Ordering::Equal => name.to_string(),
    }
}

fn distance(addr: u16, at: u16) -> u16 {
    addr.abs_diff(at)
}

// A `+`/`-` reference binds to the nearest label of that name, so any other
// label with the same rendering at the same or smaller distance makes the
// reference ambiguous.
fn local(labels: &Labels, target: u16, name: &str, at: u16) -> Result<String, Error> {
    if at == target {
        return Err(Error::SelfRelativeReference(at, name.to_string()));
    }
    let display = suffixed(name, target, at);
    let reach = distance(target, at);
    for (addr, other) in labels.iter() {
        if addr == target {
            continue;
        }
        if distance(addr, at) <= reach && suffixed(&other.name, addr, at) == display {
            return Err(Error::DuplicateLabelName {
                at,
                name: display,
                target,
                closer: addr,
            });
        }
    }
    Ok(display)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u16, &str)]) -> Labels {
        let mut labels = Labels::new();
        for (addr, name) in entries {
            labels.define(*addr, name, true);
            labels.reference(*addr);
        }
        labels
    }

    #[test]
    fn hidden_labels_render_as_hex() {
        let mut labels = Labels::new();
        labels.reference(0x1000);
        labels.reference(0x0010);
        assert_eq!(resolve(&labels, 0x1000, 0x0900, 4).unwrap(), "$1000");
        assert_eq!(resolve(&labels, 0x0010, 0x0900, 2).unwrap(), "$10");
        assert_eq!(resolve(&labels, 0x2000, 0x0900, 4).unwrap(), "$2000");
    }

    #[test]
    fn plain_label() {
        let labels = table(&[(0xD020, "BORDER")]);
        assert_eq!(resolve(&labels, 0xD020, 0x0900, 4).unwrap(), "BORDER");
        assert_eq!(resolve(&labels, 0xD020, 0xD020, 4).unwrap(), "BORDER");
    }

    #[test]
    fn local_direction() {
        let labels = table(&[(0x1000, "!loop")]);
        assert_eq!(resolve(&labels, 0x1000, 0x1010, 4).unwrap(), "!loop-");
        assert_eq!(resolve(&labels, 0x1000, 0x0ff0, 4).unwrap(), "!loop+");
    }

    #[test]
    fn local_self_reference() {
        let labels = table(&[(0x1000, "!loop")]);
        match resolve(&labels, 0x1000, 0x1000, 4) {
            Err(Error::SelfRelativeReference(at, name)) => {
                assert_eq!(at, 0x1000);
                assert_eq!(name, "!loop");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn nearest_local_wins() {
        let labels = table(&[(0x1000, "!l"), (0x1008, "!l")]);
        assert_eq!(resolve(&labels, 0x1008, 0x1010, 4).unwrap(), "!l-");
        match resolve(&labels, 0x1000, 0x1010, 4) {
            Err(Error::DuplicateLabelName { closer, target, .. }) => {
                assert_eq!(closer, 0x1008);
                assert_eq!(target, 0x1000);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn opposite_direction_does_not_clash() {
        let labels = table(&[(0x1000, "!l"), (0x1020, "!l")]);
        assert_eq!(resolve(&labels, 0x1000, 0x1010, 4).unwrap(), "!l-");
        assert_eq!(resolve(&labels, 0x1020, 0x1010, 4).unwrap(), "!l+");
    }

    #[test]
    fn hidden_namesake_clashes() {
        let mut labels = table(&[(0x1000, "!l")]);
        labels.define(0x1008, "!l", false);
        assert!(matches!(
            resolve(&labels, 0x1000, 0x1010, 4),
            Err(Error::DuplicateLabelName { closer: 0x1008, .. })
        ));
    }

    #[test]
    fn unused_namesake_clashes() {
        let mut labels = table(&[(0x1000, "!l")]);
        labels.define(0x1008, "!l", true);
        assert!(matches!(
            resolve(&labels, 0x1000, 0x1010, 4),
            Err(Error::DuplicateLabelName { closer: 0x1008, .. })
        ));
    }

    #[test]
    fn farther_namesake_does_not_clash() {
        let mut labels = table(&[(0x1008, "!l")]);
        labels.define(0x1000, "!l", false);
        assert_eq!(resolve(&labels, 0x1008, 0x1010, 4).unwrap(), "!l-");
    }
}

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    /// Set once the walk has fallen on the label's address.
    pub visible: bool,
    /// Operand references after the one that created the label. Every pass
    /// walks the whole image, so a label referenced once has a use by the
    /// time the second pass is done. Definitions do not count.
    pub uses: u32,
}

/// Address to label map, kept in insertion order.
#[derive(Debug, Default)]
pub struct Labels {
    labels: IndexMap<u16, Label>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    /// Create the label at `addr` if missing, otherwise count a use.
    ///
    /// Unnamed labels are called `label<N>` after the number of labels known
    /// when they are created. New labels start without uses. A definition
    /// never counts as a use, and a visible definition makes an existing
    /// label visible.
    pub fn ensure(&mut self, addr: u16, name: Option<&str>, visible: bool, definition: bool) {
        if let Some(label) = self.labels.get_mut(&addr) {
            if definition {
                label.visible |= visible;
            } else {
                label.uses += 1;
            }
            return;
        }
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("label{}", self.labels.len() + 1),
        };
        self.labels.insert(
            addr,
            Label {
                name,
                visible,
                uses: 0,
            },
        );
    }

    /// An operand refers to `addr`.
    pub fn reference(&mut self, addr: u16) {
        self.ensure(addr, None, false, false);
    }

    /// Configuration names `addr`.
    pub fn define(&mut self, addr: u16, name: &str, visible: bool) {
        self.ensure(addr, Some(name), visible, true);
    }

    /// The walk has reached `addr`.
    pub fn fall_at(&mut self, addr: u16) -> Option<&Label> {
        let label = self.labels.get_mut(&addr)?;
        label.visible = true;
        Some(label)
    }

    pub fn get(&self, addr: u16) -> Option<&Label> {
        self.labels.get(&addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &Label)> {
        self.labels.iter().map(|(addr, label)| (*addr, label))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

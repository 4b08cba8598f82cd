use std::fmt::Display;

use crate::{
    config::Setup,
    context::Context,
    error::Error,
    label::Labels,
    msg::Msg,
    resolve::hex,
};

/// The three walks over the image, always run in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Pass {
    /// Collect every operand address into the label table.
    Discover,
    /// Make labels visible where the walk falls on them.
    Mark,
    /// Produce the listing.
    Emit,
}

/// Finished listing plus the diagnostics gathered on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub lines: Vec<String>,
    pub msgs: Vec<Msg>,
}

impl Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Disassemble a program file image: two byte load address, then the bytes.
pub fn disassemble(image: &[u8], setup: &Setup) -> Result<Listing, Error> {
    let mut labels = Labels::new();
    let mut listing = Listing::default();

    for (addr, name) in &setup.labels {
        labels.define(*addr, name, false);
    }

    for pass in [Pass::Discover, Pass::Mark, Pass::Emit] {
        match pass {
            Pass::Discover => {
                seed_constants(&mut labels, setup);
            }
            Pass::Mark => {}
            Pass::Emit => listing.lines = seed_constants(&mut labels, setup),
        }

        let mut ctx = Context::new(image, setup, &mut labels, pass);
        ctx.run()?;
        let lines = ctx.lines.len();
        listing.lines.extend(ctx.lines);
        listing.msgs.extend(ctx.msgs);
        listing.msgs.push(Msg::Note(format!(
            "{} pass: {} labels, {} lines",
            pass,
            labels.len(),
            lines
        )));
    }
    Ok(listing)
}

/// Define every constant as a visible label and return `.label` declarations
/// for the ones referenced so far.
fn seed_constants(labels: &mut Labels, setup: &Setup) -> Vec<String> {
    let mut lines = vec![];
    for (addr, name) in &setup.constants {
        // A configured label at the same address keeps its own name.
        if let Some(label) = labels.get(*addr).filter(|label| label.uses > 0) {
            lines.push(format!(".label {} = {}", label.name, hex(*addr, 4)));
        }
        labels.define(*addr, name, true);
    }
    lines
}

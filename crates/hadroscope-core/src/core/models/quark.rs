/// The six quark flavors of the Standard Model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarkFlavor {
    Up,
    Down,
    Strange,
    Charm,
    Bottom,
    Top,
}

impl QuarkFlavor {
    /// Parses a single-letter flavor token such as `"u"` or `"s"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "u" => Some(QuarkFlavor::Up),
            "d" => Some(QuarkFlavor::Down),
            "s" => Some(QuarkFlavor::Strange),
            "c" => Some(QuarkFlavor::Charm),
            "b" => Some(QuarkFlavor::Bottom),
            "t" => Some(QuarkFlavor::Top),
            _ => None,
        }
    }

    /// Recognizes a flavor from a constituent name such as "Anti-Up Quark".
    pub fn from_constituent(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.contains("up") {
            Some(QuarkFlavor::Up)
        } else if lower.contains("down") {
            Some(QuarkFlavor::Down)
        } else if lower.contains("strange") {
            Some(QuarkFlavor::Strange)
        } else if lower.contains("charm") {
            Some(QuarkFlavor::Charm)
        } else if lower.contains("bottom") {
            Some(QuarkFlavor::Bottom)
        } else if lower.contains("top") {
            Some(QuarkFlavor::Top)
        } else {
            None
        }
    }

    /// The lowercase flavor letter used in quark-content strings.
    pub fn letter(&self) -> char {
        match self {
            QuarkFlavor::Up => 'u',
            QuarkFlavor::Down => 'd',
            QuarkFlavor::Strange => 's',
            QuarkFlavor::Charm => 'c',
            QuarkFlavor::Bottom => 'b',
            QuarkFlavor::Top => 't',
        }
    }

    /// Electric charge in units of e for the normal-matter quark.
    pub fn charge(&self) -> f64 {
        match self {
            QuarkFlavor::Up | QuarkFlavor::Charm | QuarkFlavor::Top => 2.0 / 3.0,
            QuarkFlavor::Down | QuarkFlavor::Strange | QuarkFlavor::Bottom => -1.0 / 3.0,
        }
    }
}

/// One quark inside a hadron's expanded composition.
///
/// A composition entry with a count of three expands into three instances, so
/// consumers can render each constituent individually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarkInstance {
    /// Flavor, when the source record allowed one to be recognized.
    pub flavor: Option<QuarkFlavor>,
    pub is_anti: bool,
    /// Charge in units of e as carried by the source record (0 when absent).
    pub charge: f64,
}

impl QuarkInstance {
    /// Charge in units of e, falling back to the theoretical flavor charge
    /// (sign-flipped for antiquarks) when the record carried none.
    pub fn effective_charge(&self) -> f64 {
        if self.charge != 0.0 {
            return self.charge;
        }
        match self.flavor {
            Some(flavor) if self.is_anti => -flavor.charge(),
            Some(flavor) => flavor.charge(),
            None => 0.0,
        }
    }
}

/// The keyboard definitions of the terminal
pub(crate) mod keyboard {
    /// The host keys, at the same positions as the keys of the chipset layout.
    pub const HOST_LAYOUT: [[char; 4]; 4] = [
        ['1', '2', '3', '4'],
        ['q', 'w', 'e', 'r'],
        ['a', 's', 'd', 'f'],
        ['z', 'x', 'c', 'v'],
    ];

    /// Terminals only report presses, a key counts as held for this long after
    /// its last press or repeat event.
    pub const HOLD_MILLIS: u64 = 150;
}

/// The display definitions of the terminal
pub(crate) mod field {
    /// both the upper and the lower pixel are set
    pub const FULL: char = '█';
    /// only the upper pixel is set
    pub const UPPER: char = '▀';
    /// only the lower pixel is set
    pub const LOWER: char = '▄';
    /// no pixel is set
    pub const EMPTY: char = ' ';
}

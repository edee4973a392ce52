//! Logical input actions and the four command slots.

/// The four logical keys that hold a swappable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandSlot {
    W,
    A,
    S,
    D,
}

impl CommandSlot {
    pub const ALL: [CommandSlot; 4] = [CommandSlot::W, CommandSlot::A, CommandSlot::S, CommandSlot::D];

    pub(crate) fn index(self) -> usize {
        match self {
            CommandSlot::W => 0,
            CommandSlot::A => 1,
            CommandSlot::S => 2,
            CommandSlot::D => 3,
        }
    }

    /// The input action that triggers this slot.
    pub fn action(self) -> InputAction {
        match self {
            CommandSlot::W => InputAction::ButtonW,
            CommandSlot::A => InputAction::ButtonA,
            CommandSlot::S => InputAction::ButtonS,
            CommandSlot::D => InputAction::ButtonD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommandSlot::W => "W",
            CommandSlot::A => "A",
            CommandSlot::S => "S",
            CommandSlot::D => "D",
        }
    }
}

/// Every action that can be bound to a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    ButtonW,
    ButtonA,
    ButtonS,
    ButtonD,
    Undo,
    Redo,
    SwapBindings,
    Replay,
    ReversedPlay,
    StopReplay,
}

impl InputAction {
    /// Human-readable label for the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Self::ButtonW => "Button W",
            Self::ButtonA => "Button A",
            Self::ButtonS => "Button S",
            Self::ButtonD => "Button D",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
            Self::SwapBindings => "Swap Bindings",
            Self::Replay => "Replay",
            Self::ReversedPlay => "Reversed Play",
            Self::StopReplay => "Stop Replay",
        }
    }

    /// The command slot this action triggers, for the four buttons.
    pub fn slot(self) -> Option<CommandSlot> {
        match self {
            Self::ButtonW => Some(CommandSlot::W),
            Self::ButtonA => Some(CommandSlot::A),
            Self::ButtonS => Some(CommandSlot::S),
            Self::ButtonD => Some(CommandSlot::D),
            _ => None,
        }
    }

    /// All bindable actions in display order.
    pub const ALL: &'static [InputAction] = &[
        Self::ButtonW,
        Self::ButtonA,
        Self::ButtonS,
        Self::ButtonD,
        Self::Undo,
        Self::Redo,
        Self::SwapBindings,
        Self::Replay,
        Self::ReversedPlay,
        Self::StopReplay,
    ];
}

use crate::bits::get_bit;
use crate::lr35902::irq::{Interrupts, Vector};
use crate::state::Archive;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Button {
    A,
    B,
    Start,
    Select,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    fn is_action(self) -> bool {
        matches!(self, Button::A | Button::B | Button::Start | Button::Select)
    }
}

#[derive(Default)]
struct ButtonStates {
    a: bool,
    b: bool,
    start: bool,
    select: bool,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl ButtonStates {
    fn get(&mut self, button: Button) -> &mut bool {
        match button {
            Button::A => &mut self.a,
            Button::B => &mut self.b,
            Button::Start => &mut self.start,
            Button::Select => &mut self.select,
            Button::Up => &mut self.up,
            Button::Down => &mut self.down,
            Button::Left => &mut self.left,
            Button::Right => &mut self.right,
        }
    }

    fn serialize(&mut self, ar: &mut Archive) {
        ar.bool(&mut self.a);
        ar.bool(&mut self.b);
        ar.bool(&mut self.start);
        ar.bool(&mut self.select);
        ar.bool(&mut self.up);
        ar.bool(&mut self.down);
        ar.bool(&mut self.left);
        ar.bool(&mut self.right);
    }
}

/// $FF00 - P1/JOYP.
///
/// The eight buttons form a 2x4 matrix. Software selects a column through
/// bits 4..5 (active low) and reads the row states in bits 0..3, also
/// active low. Only the select bits are writable.
pub struct Joypad {
    select: u8,
    buttons: ButtonStates,
    /// Edges reported by the host, applied on the next M-cycle tick.
    /// Transient, so they never enter save states.
    pending: Vec<(Button, bool)>,
}

impl Joypad {
    pub fn new() -> Joypad {
        Joypad {
            select: 0x30,
            buttons: ButtonStates::default(),
            pending: Vec::new(),
        }
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.pending.push((button, pressed));
    }

    fn action_selected(&self) -> bool {
        !get_bit(self.select, 5)
    }

    fn directional_selected(&self) -> bool {
        !get_bit(self.select, 4)
    }

    pub fn read(&self) -> u8 {
        let mut pressed = 0x00u8;

        if self.action_selected() {
            pressed |= (self.buttons.a as u8)
                | (self.buttons.b as u8) << 1
                | (self.buttons.select as u8) << 2
                | (self.buttons.start as u8) << 3;
        }
        if self.directional_selected() {
            pressed |= (self.buttons.right as u8)
                | (self.buttons.left as u8) << 1
                | (self.buttons.up as u8) << 2
                | (self.buttons.down as u8) << 3;
        }

        // Unwired upper bits read as 1, pressed buttons pull their bit low
        0xc0 | self.select | !pressed & 0x0f
    }

    pub fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Applies queued host edges. A press raises the Joypad interrupt when
    /// the button's column is currently selected; releases never do.
    pub fn tick(&mut self, irq: &mut Interrupts) {
        let action_selected = self.action_selected();
        let directional_selected = self.directional_selected();

        for (button, pressed) in std::mem::take(&mut self.pending) {
            let state = self.buttons.get(button);
            if *state == pressed {
                continue;
            }
            *state = pressed;

            let selected = if button.is_action() {
                action_selected
            } else {
                directional_selected
            };
            if pressed && selected {
                irq.request(Vector::Joypad);
            }
        }
    }

    pub fn serialize(&mut self, ar: &mut Archive) {
        ar.u8(&mut self.select);
        self.buttons.serialize(ar);
    }
}

impl Default for Joypad {
    fn default() -> Joypad {
        Joypad::new()
    }
}

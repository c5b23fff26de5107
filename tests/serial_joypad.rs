//! Serial capture and the joypad matrix, driven by real programs.

mod common;

use common::{disable_lcd, gameboy_with};
use dotboy::Button;

#[test]
fn program_output_lands_in_the_serial_log() {
    // LD A,'h' ; LDH [0x01],A ; LD A,0x81 ; LDH [0x02],A
    // LD A,'i' ; LDH [0x01],A ; LD A,0x81 ; LDH [0x02],A
    let mut gb = gameboy_with(&[
        0x3e, b'h', 0xe0, 0x01, 0x3e, 0x81, 0xe0, 0x02, //
        0x3e, b'i', 0xe0, 0x01, 0x3e, 0x81, 0xe0, 0x02,
    ]);
    disable_lcd(&mut gb);

    for _ in 0..8 {
        gb.step().unwrap();
    }

    assert_eq!(gb.serial_output(), b"hi");
    assert_eq!(gb.mmu.peek(0xff01), b'i');
    assert_eq!(gb.mmu.peek(0xff02), 0x81);
}

#[test]
fn control_writes_without_the_start_bit_capture_nothing() {
    let mut gb = gameboy_with(&[0x00; 0x10]);
    gb.mmu.poke(0xff01, 0x42);
    gb.mmu.poke(0xff02, 0x01);
    assert!(gb.serial_output().is_empty());
}

#[test]
fn joypad_matrix_reads_selected_column() {
    let mut gb = gameboy_with(&[0x00; 0x20]);
    disable_lcd(&mut gb);

    gb.set_button(Button::A, true);
    gb.set_button(Button::Down, true);
    gb.step().unwrap(); // edges apply on the next M-cycle

    gb.mmu.poke(0xff00, 0x10); // select action buttons
    assert_eq!(gb.mmu.peek(0xff00) & 0x0f, 0b1110, "A pressed");

    gb.mmu.poke(0xff00, 0x20); // select directional pad
    assert_eq!(gb.mmu.peek(0xff00) & 0x0f, 0b0111, "Down pressed");

    gb.mmu.poke(0xff00, 0x30); // nothing selected
    assert_eq!(gb.mmu.peek(0xff00) & 0x0f, 0x0f);
}

#[test]
fn select_bits_are_the_only_writable_ones() {
    let mut gb = gameboy_with(&[0x00; 0x20]);

    gb.mmu.poke(0xff00, 0xff);
    assert_eq!(gb.mmu.peek(0xff00), 0xff, "select lines high, no buttons");

    gb.mmu.poke(0xff00, 0x00);
    assert_eq!(gb.mmu.peek(0xff00) & 0x30, 0x00);
    assert_eq!(gb.mmu.peek(0xff00) & 0xc0, 0xc0, "upper bits always read 1");
}

#[test]
fn press_edge_raises_the_interrupt_when_selected() {
    let mut gb = gameboy_with(&[0x00; 0x20]);
    disable_lcd(&mut gb);

    gb.mmu.poke(0xff00, 0x10); // action column selected
    gb.set_button(Button::Start, true);
    gb.step().unwrap();
    assert_eq!(gb.mmu.peek(0xff0f) & 0x10, 0x10);

    // Releases and unselected columns stay silent
    gb.mmu.poke(0xff0f, 0x00);
    gb.set_button(Button::Start, false);
    gb.set_button(Button::Up, true);
    gb.step().unwrap();
    assert_eq!(gb.mmu.peek(0xff0f) & 0x10, 0x00);
}

#[test]
fn held_button_produces_a_single_edge() {
    let mut gb = gameboy_with(&[0x00; 0x20]);
    disable_lcd(&mut gb);
    gb.mmu.poke(0xff00, 0x10);

    gb.set_button(Button::B, true);
    gb.step().unwrap();
    assert_eq!(gb.mmu.peek(0xff0f) & 0x10, 0x10);

    gb.mmu.poke(0xff0f, 0x00);
    gb.set_button(Button::B, true); // still held, no new edge
    gb.step().unwrap();
    assert_eq!(gb.mmu.peek(0xff0f) & 0x10, 0x00);
}

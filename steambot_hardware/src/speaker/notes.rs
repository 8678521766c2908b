//! Equal-tempered note frequencies, rounded to the nearest hertz.
//!
//! `CS4` is C sharp in the fourth octave, `A4` is concert A.

use fugit::HertzU32;

/// Silence. The speaker treats a zero frequency as "stop the tone".
pub const REST: HertzU32 = HertzU32::from_raw(0);

pub const B0: HertzU32 = HertzU32::from_raw(31);
pub const C1: HertzU32 = HertzU32::from_raw(33);
pub const CS1: HertzU32 = HertzU32::from_raw(35);
pub const D1: HertzU32 = HertzU32::from_raw(37);
pub const DS1: HertzU32 = HertzU32::from_raw(39);
pub const E1: HertzU32 = HertzU32::from_raw(41);
pub const F1: HertzU32 = HertzU32::from_raw(44);
pub const FS1: HertzU32 = HertzU32::from_raw(46);
pub const G1: HertzU32 = HertzU32::from_raw(49);
pub const GS1: HertzU32 = HertzU32::from_raw(52);
pub const A1: HertzU32 = HertzU32::from_raw(55);
pub const AS1: HertzU32 = HertzU32::from_raw(58);
pub const B1: HertzU32 = HertzU32::from_raw(62);
pub const C2: HertzU32 = HertzU32::from_raw(65);
pub const CS2: HertzU32 = HertzU32::from_raw(69);
pub const D2: HertzU32 = HertzU32::from_raw(73);
pub const DS2: HertzU32 = HertzU32::from_raw(78);
pub const E2: HertzU32 = HertzU32::from_raw(82);
pub const F2: HertzU32 = HertzU32::from_raw(87);
pub const FS2: HertzU32 = HertzU32::from_raw(93);
pub const G2: HertzU32 = HertzU32::from_raw(98);
pub const GS2: HertzU32 = HertzU32::from_raw(104);
pub const A2: HertzU32 = HertzU32::from_raw(110);
pub const AS2: HertzU32 = HertzU32::from_raw(117);
pub const B2: HertzU32 = HertzU32::from_raw(123);
pub const C3: HertzU32 = HertzU32::from_raw(131);
pub const CS3: HertzU32 = HertzU32::from_raw(139);
pub const D3: HertzU32 = HertzU32::from_raw(147);
pub const DS3: HertzU32 = HertzU32::from_raw(156);
pub const E3: HertzU32 = HertzU32::from_raw(165);
pub const F3: HertzU32 = HertzU32::from_raw(175);
pub const FS3: HertzU32 = HertzU32::from_raw(185);
pub const G3: HertzU32 = HertzU32::from_raw(196);
pub const GS3: HertzU32 = HertzU32::from_raw(208);
pub const A3: HertzU32 = HertzU32::from_raw(220);
pub const AS3: HertzU32 = HertzU32::from_raw(233);
pub const B3: HertzU32 = HertzU32::from_raw(247);
pub const C4: HertzU32 = HertzU32::from_raw(262);
pub const CS4: HertzU32 = HertzU32::from_raw(277);
pub const D4: HertzU32 = HertzU32::from_raw(294);
pub const DS4: HertzU32 = HertzU32::from_raw(311);
pub const E4: HertzU32 = HertzU32::from_raw(330);
pub const F4: HertzU32 = HertzU32::from_raw(349);
pub const FS4: HertzU32 = HertzU32::from_raw(370);
pub const G4: HertzU32 = HertzU32::from_raw(392);
pub const GS4: HertzU32 = HertzU32::from_raw(415);
pub const A4: HertzU32 = HertzU32::from_raw(440);
pub const AS4: HertzU32 = HertzU32::from_raw(466);
pub const B4: HertzU32 = HertzU32::from_raw(494);
pub const C5: HertzU32 = HertzU32::from_raw(523);
pub const CS5: HertzU32 = HertzU32::from_raw(554);
pub const D5: HertzU32 = HertzU32::from_raw(587);
pub const DS5: HertzU32 = HertzU32::from_raw(622);
pub const E5: HertzU32 = HertzU32::from_raw(659);
pub const F5: HertzU32 = HertzU32::from_raw(698);
pub const FS5: HertzU32 = HertzU32::from_raw(740);
pub const G5: HertzU32 = HertzU32::from_raw(784);
pub const GS5: HertzU32 = HertzU32::from_raw(831);
pub const A5: HertzU32 = HertzU32::from_raw(880);
pub const AS5: HertzU32 = HertzU32::from_raw(932);
pub const B5: HertzU32 = HertzU32::from_raw(988);
pub const C6: HertzU32 = HertzU32::from_raw(1047);
pub const CS6: HertzU32 = HertzU32::from_raw(1109);
pub const D6: HertzU32 = HertzU32::from_raw(1175);
pub const DS6: HertzU32 = HertzU32::from_raw(1245);
pub const E6: HertzU32 = HertzU32::from_raw(1319);
pub const F6: HertzU32 = HertzU32::from_raw(1397);
pub const FS6: HertzU32 = HertzU32::from_raw(1480);
pub const G6: HertzU32 = HertzU32::from_raw(1568);
pub const GS6: HertzU32 = HertzU32::from_raw(1661);
pub const A6: HertzU32 = HertzU32::from_raw(1760);
pub const AS6: HertzU32 = HertzU32::from_raw(1865);
pub const B6: HertzU32 = HertzU32::from_raw(1976);
pub const C7: HertzU32 = HertzU32::from_raw(2093);
pub const CS7: HertzU32 = HertzU32::from_raw(2217);
pub const D7: HertzU32 = HertzU32::from_raw(2349);
pub const DS7: HertzU32 = HertzU32::from_raw(2489);
pub const E7: HertzU32 = HertzU32::from_raw(2637);
pub const F7: HertzU32 = HertzU32::from_raw(2794);
pub const FS7: HertzU32 = HertzU32::from_raw(2960);
pub const G7: HertzU32 = HertzU32::from_raw(3136);
pub const GS7: HertzU32 = HertzU32::from_raw(3322);
pub const A7: HertzU32 = HertzU32::from_raw(3520);
pub const AS7: HertzU32 = HertzU32::from_raw(3729);
pub const B7: HertzU32 = HertzU32::from_raw(3951);
pub const C8: HertzU32 = HertzU32::from_raw(4186);
pub const CS8: HertzU32 = HertzU32::from_raw(4435);
pub const D8: HertzU32 = HertzU32::from_raw(4699);
pub const DS8: HertzU32 = HertzU32::from_raw(4978);

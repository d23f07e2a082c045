//! Named TMCL operations.
//!
//! Thin wrappers over [`Tmcl::exec`](crate::Tmcl::exec): each supplies a
//! fixed opcode plus type/bank constants and reshapes the returned value
//! where the protocol packs it (application status in the top byte,
//! firmware version as eight hex digits).

use crate::client::Tmcl;
use crate::error::Result;

/// Command opcodes.
pub mod opcode {
    /// Rotate right.
    pub const ROR: u8 = 1;
    /// Rotate left.
    pub const ROL: u8 = 2;
    /// Motor stop.
    pub const MST: u8 = 3;
    /// Move to position.
    pub const MVP: u8 = 4;
    /// Set axis parameter.
    pub const SAP: u8 = 5;
    /// Get axis parameter.
    pub const GAP: u8 = 6;
    /// Store axis parameter to EEPROM.
    pub const STAP: u8 = 7;
    /// Restore axis parameter from EEPROM.
    pub const RSAP: u8 = 8;
    /// Set global parameter.
    pub const SGP: u8 = 9;
    /// Get global parameter.
    pub const GGP: u8 = 10;
    /// Store global parameter to EEPROM.
    pub const STGP: u8 = 11;
    /// Restore global parameter from EEPROM.
    pub const RSGP: u8 = 12;
    /// Set digital/analog output.
    pub const SIO: u8 = 14;
    /// Get digital/analog input.
    pub const GIO: u8 = 15;
    /// Stop a running standalone application.
    pub const STOP_APPLICATION: u8 = 128;
    /// Start the standalone application.
    pub const RUN_APPLICATION: u8 = 129;
    /// Execute the next application command.
    pub const STEP_APPLICATION: u8 = 130;
    /// Reset the application program counter.
    pub const RESET_APPLICATION: u8 = 131;
    /// Query application status.
    pub const GET_APPLICATION_STATUS: u8 = 135;
    /// Query firmware version.
    pub const GET_FIRMWARE_VERSION: u8 = 136;
}

/// Parameter and I/O banks.
pub mod bank {
    /// Bank of the program's global variables.
    pub const GLOBAL_PARAMETER: u8 = 2;
    /// Bank used with GIO/SIO for digital inputs.
    pub const DIGITAL_INPUT: u8 = 0;
    /// Bank used for analog inputs.
    pub const ANALOG_INPUT: u8 = 1;
    /// Bank used for controlling the outputs.
    pub const DIGITAL_OUTPUT: u8 = 2;
}

/// Default board baud rate.
pub const DEFAULT_SERIAL_BAUD: u32 = 9600;

/// Positioning mode for [`Tmcl::mvp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Absolute target position.
    Absolute,
    /// Offset relative to the current position.
    Relative,
    /// Stored coordinate number.
    Coordinate,
}

impl MoveMode {
    /// Wire type number for this mode.
    pub fn type_number(self) -> u8 {
        match self {
            MoveMode::Absolute => 0,
            MoveMode::Relative => 1,
            MoveMode::Coordinate => 2,
        }
    }
}

impl Tmcl {
    /// ROR - rotate right at the given velocity.
    pub fn ror(&self, motor: u8, velocity: i32) -> Result<()> {
        self.exec(opcode::ROR, 0, motor, velocity).map(drop)
    }

    /// ROL - rotate left at the given velocity.
    pub fn rol(&self, motor: u8, velocity: i32) -> Result<()> {
        self.exec(opcode::ROL, 0, motor, velocity).map(drop)
    }

    /// MST - stop the motor.
    pub fn mst(&self, motor: u8) -> Result<()> {
        self.exec(opcode::MST, 0, motor, 0).map(drop)
    }

    /// MVP - move an axis to a position.
    pub fn mvp(&self, mode: MoveMode, motor: u8, value: i32) -> Result<()> {
        self.exec(opcode::MVP, mode.type_number(), motor, value)
            .map(drop)
    }

    /// SAP - set axis parameter.
    pub fn sap(&self, index: u8, motor: u8, value: i32) -> Result<()> {
        self.exec(opcode::SAP, index, motor, value).map(drop)
    }

    /// GAP - get axis parameter.
    pub fn gap(&self, index: u8, motor: u8) -> Result<i32> {
        self.exec(opcode::GAP, index, motor, 0)
    }

    /// STAP - store axis parameter to EEPROM.
    pub fn stap(&self, index: u8, motor: u8) -> Result<()> {
        self.exec(opcode::STAP, index, motor, 0).map(drop)
    }

    /// RSAP - restore axis parameter from EEPROM.
    pub fn rsap(&self, index: u8, motor: u8) -> Result<()> {
        self.exec(opcode::RSAP, index, motor, 0).map(drop)
    }

    /// SGP - set global parameter.
    pub fn sgp(&self, index: u8, bank: u8, value: i32) -> Result<()> {
        self.exec(opcode::SGP, index, bank, value).map(drop)
    }

    /// GGP - get global parameter.
    pub fn ggp(&self, index: u8, bank: u8) -> Result<i32> {
        self.exec(opcode::GGP, index, bank, 0)
    }

    /// STGP - store global parameter to EEPROM.
    pub fn stgp(&self, index: u8, bank: u8) -> Result<i32> {
        self.exec(opcode::STGP, index, bank, 0)
    }

    /// RSGP - restore global parameter from EEPROM.
    pub fn rsgp(&self, index: u8, bank: u8) -> Result<i32> {
        self.exec(opcode::RSGP, index, bank, 0)
    }

    /// SIO - set a digital output.
    pub fn sio(&self, port: u8, bank: u8, value: bool) -> Result<()> {
        self.exec(opcode::SIO, port, bank, i32::from(value)).map(drop)
    }

    /// GIO - read a digital or analog input.
    pub fn gio(&self, port: u8, bank: u8) -> Result<i32> {
        self.exec(opcode::GIO, port, bank, 0)
    }

    /// Stop a running standalone application.
    pub fn stop_application(&self) -> Result<()> {
        self.exec(opcode::STOP_APPLICATION, 0, 0, 0).map(drop)
    }

    /// Start the standalone application.
    ///
    /// With `Some(address)` execution starts at that program address;
    /// with `None` it resumes at the current one.
    pub fn run_application(&self, from: Option<i32>) -> Result<()> {
        let (type_number, address) = match from {
            Some(address) => (1, address),
            None => (0, 0),
        };

        self.exec(opcode::RUN_APPLICATION, type_number, 0, address)
            .map(drop)
    }

    /// Execute only the next command of the standalone application.
    pub fn step_application(&self) -> Result<()> {
        self.exec(opcode::STEP_APPLICATION, 0, 0, 0).map(drop)
    }

    /// Set the program counter to zero and stop the application.
    pub fn reset_application(&self) -> Result<()> {
        self.exec(opcode::RESET_APPLICATION, 0, 0, 0).map(drop)
    }

    /// Query the application status.
    ///
    /// Returns:
    /// 0 - stop, 1 - run, 2 - step, 3 - reset.
    pub fn application_status(&self) -> Result<i32> {
        let value = self.exec(opcode::GET_APPLICATION_STATUS, 0, 0, 0)?;

        // Status lives in the top byte of the value field.
        Ok(((value as u32 >> 24) & 0xFF) as i32)
    }

    /// Query the firmware version, formatted as eight hex digits.
    pub fn firmware_version(&self) -> Result<String> {
        // Type 1 selects the binary output format.
        let value = self.exec(opcode::GET_FIRMWARE_VERSION, 1, 0, 0)?;

        Ok(format!("{:08X}", value))
    }
}

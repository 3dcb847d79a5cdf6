// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Frame SET/GET_PROPERTY commands over a byte command channel and poll for completion.
// Author: Lukas Bower

use log::trace;

use super::{PropertyTransport, TransportError};
use crate::types::PropertyId;

const CMD_SET_PROPERTY: u8 = 0x14;
const CMD_GET_PROPERTY: u8 = 0x15;

const STATUS_CTS: u8 = 0x80;
const STATUS_ERR: u8 = 0x40;

/// Error code the device returns for a property it does not implement.
pub const ERR_BAD_PROPERTY: u8 = 0x04;

const REPLY_LEN: usize = 4;

/// Status reads attempted before a command is declared timed out.
pub const DEFAULT_MAX_POLLS: u32 = 100;

/// Raw command channel to the device (I2C/SPI or a simulation of it).
pub trait CommandChannel {
    /// Send one command.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Read the current reply into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError>;
}

/// [`PropertyTransport`] speaking the Si2183 property commands over a
/// [`CommandChannel`].
#[derive(Debug)]
pub struct CommandTransport<C> {
    channel: C,
    max_polls: u32,
}

impl<C: CommandChannel> CommandTransport<C> {
    /// Transport with the default polling budget.
    pub fn new(channel: C) -> Self {
        Self::with_max_polls(channel, DEFAULT_MAX_POLLS)
    }

    /// Transport giving up after `max_polls` replies without CTS.
    pub fn with_max_polls(channel: C, max_polls: u32) -> Self {
        Self { channel, max_polls }
    }

    /// Underlying channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Consume the transport and return its channel.
    pub fn into_inner(self) -> C {
        self.channel
    }

    fn execute(&mut self, command: &[u8]) -> Result<[u8; REPLY_LEN], TransportError> {
        self.channel.write(command)?;
        let mut reply = [0u8; REPLY_LEN];
        for poll in 0..self.max_polls {
            self.channel.read(&mut reply)?;
            let status = reply[0];
            if status & STATUS_CTS == 0 {
                continue;
            }
            trace!("cmd 0x{:02x} complete after {} polls", command[0], poll + 1);
            if status & STATUS_ERR != 0 {
                return Err(match reply[1] {
                    ERR_BAD_PROPERTY => TransportError::UnknownProperty,
                    code => TransportError::Device { code },
                });
            }
            return Ok(reply);
        }
        Err(TransportError::Timeout)
    }
}

fn set_property_frame(id: PropertyId, value: u32) -> Result<[u8; 6], TransportError> {
    let data = u16::try_from(value).map_err(|_| TransportError::ValueOutOfRange { value })?;
    let [code_lo, code_hi] = id.code().to_le_bytes();
    let [data_lo, data_hi] = data.to_le_bytes();
    Ok([CMD_SET_PROPERTY, 0x00, code_lo, code_hi, data_lo, data_hi])
}

fn get_property_frame(id: PropertyId) -> [u8; 4] {
    let [code_lo, code_hi] = id.code().to_le_bytes();
    [CMD_GET_PROPERTY, 0x00, code_lo, code_hi]
}

impl<C: CommandChannel> PropertyTransport for CommandTransport<C> {
    fn send_property_set(&mut self, id: PropertyId, value: u32) -> Result<(), TransportError> {
        let frame = set_property_frame(id, value)?;
        self.execute(&frame).map(|_| ())
    }

    fn send_property_get(&mut self, id: PropertyId) -> Result<u32, TransportError> {
        let reply = self.execute(&get_property_frame(id))?;
        Ok(u32::from(u16::from_le_bytes([reply[2], reply[3]])))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    struct ScriptedChannel {
        written: Vec<Vec<u8>>,
        replies: VecDeque<[u8; REPLY_LEN]>,
    }

    impl CommandChannel for ScriptedChannel {
        fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
            self.written.push(bytes.to_vec());
            Ok(())
        }

        fn read(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
            let reply = self.replies.pop_front().ok_or(TransportError::Nack)?;
            buf.copy_from_slice(&reply);
            Ok(())
        }
    }

    fn channel(replies: &[[u8; REPLY_LEN]]) -> ScriptedChannel {
        ScriptedChannel {
            written: Vec::new(),
            replies: replies.iter().copied().collect(),
        }
    }

    #[test]
    fn set_property_frames_code_and_data_little_endian() {
        let mut transport = CommandTransport::new(channel(&[[STATUS_CTS, 0, 0, 0]]));
        transport
            .send_property_set(PropertyId::new(0x100d), 720)
            .expect("acknowledged");
        assert_eq!(
            transport.channel().written,
            vec![vec![0x14, 0x00, 0x0d, 0x10, 0xd0, 0x02]]
        );
    }

    #[test]
    fn get_property_polls_until_cts() {
        let replies = [[0x00, 0, 0, 0], [0x00, 0, 0, 0], [STATUS_CTS, 0, 0xd0, 0x02]];
        let mut transport = CommandTransport::new(channel(&replies));
        assert_eq!(transport.send_property_get(PropertyId::new(0x100d)), Ok(720));
        assert_eq!(transport.channel().written, vec![vec![0x15, 0x00, 0x0d, 0x10]]);
    }

    #[test]
    fn missing_cts_times_out() {
        let replies = [[0x00, 0, 0, 0]; 3];
        let mut transport = CommandTransport::with_max_polls(channel(&replies), 3);
        assert_eq!(
            transport.send_property_set(PropertyId::new(0x0401), 0),
            Err(TransportError::Timeout)
        );
    }

    #[test]
    fn bad_property_maps_to_unknown_property() {
        let mut transport =
            CommandTransport::new(channel(&[[STATUS_CTS | STATUS_ERR, ERR_BAD_PROPERTY, 0, 0]]));
        assert_eq!(
            transport.send_property_get(PropertyId::new(0x7777)),
            Err(TransportError::UnknownProperty)
        );
    }

    #[test]
    fn other_device_errors_carry_their_code() {
        let mut transport =
            CommandTransport::new(channel(&[[STATUS_CTS | STATUS_ERR, 0x11, 0, 0]]));
        assert_eq!(
            transport.send_property_set(PropertyId::new(0x0401), 1),
            Err(TransportError::Device { code: 0x11 })
        );
    }

    #[test]
    fn values_wider_than_sixteen_bits_are_not_sent() {
        let mut transport = CommandTransport::new(channel(&[]));
        assert_eq!(
            transport.send_property_set(PropertyId::new(0x0401), 0x1_0000),
            Err(TransportError::ValueOutOfRange { value: 0x1_0000 })
        );
        assert!(transport.channel().written.is_empty());
    }
}

use pnet_packet::MutablePacket;
use pnet_packet::icmp::echo_reply::EchoReplyPacket;
use pnet_packet::icmp::echo_request::MutableEchoRequestPacket;
use pnet_packet::icmp::{IcmpCode, IcmpPacket, IcmpType, IcmpTypes, checksum};

/// ICMP echo header size (type, code, checksum, identifier, sequence)
pub(super) const ICMP_HEADER_SIZE: usize = 8;
/// Payload size of a standard ping
pub(super) const DEFAULT_PAYLOAD_SIZE: usize = 56;

// ICMPv6 echo types (RFC 4443)
const ICMPV6_ECHO_REQUEST: u8 = 128;
const ICMPV6_ECHO_REPLY: u8 = 129;

const IPV4_MIN_HEADER_LEN: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct EchoReply {
    pub(super) identifier: u16,
    pub(super) sequence: u16,
}

/// Builds an echo request. The ICMPv6 checksum is left to the kernel since it
/// covers a pseudo-header we never see.
pub(super) fn build_echo_request(
    identifier: u16,
    sequence: u16,
    payload_size: usize,
    ipv6: bool,
) -> Vec<u8> {
    let mut buffer = vec![0u8; ICMP_HEADER_SIZE + payload_size];

    if let Some(mut packet) = MutableEchoRequestPacket::new(&mut buffer) {
        if ipv6 {
            packet.set_icmp_type(IcmpType::new(ICMPV6_ECHO_REQUEST));
        } else {
            packet.set_icmp_type(IcmpTypes::EchoRequest);
        }
        packet.set_icmp_code(IcmpCode::new(0));
        packet.set_identifier(identifier);
        packet.set_sequence_number(sequence);
        for (i, byte) in packet.payload_mut().iter_mut().enumerate() {
            *byte = (i & 0xFF) as u8;
        }
    }

    if !ipv6 {
        let sum = IcmpPacket::new(&buffer).map(|packet| checksum(&packet));
        if let Some(sum) = sum {
            buffer[2..4].copy_from_slice(&sum.to_be_bytes());
        }
    }

    buffer
}

/// Parses an echo reply. IPv4 raw sockets (and DGRAM sockets on macOS)
/// deliver the IP header in front of the ICMP message.
pub(super) fn parse_echo_reply(data: &[u8], ipv6: bool) -> Option<EchoReply> {
    let icmp = if ipv6 { data } else { strip_ipv4_header(data)? };
    let packet = EchoReplyPacket::new(icmp)?;

    let expected = if ipv6 {
        IcmpType::new(ICMPV6_ECHO_REPLY)
    } else {
        IcmpTypes::EchoReply
    };
    if packet.get_icmp_type() != expected {
        return None;
    }

    Some(EchoReply {
        identifier: packet.get_identifier(),
        sequence: packet.get_sequence_number(),
    })
}

fn strip_ipv4_header(data: &[u8]) -> Option<&[u8]> {
    let first = *data.first()?;
    if first >> 4 != 4 {
        return Some(data);
    }
    let header_len = usize::from(first & 0x0F) * 4;
    if header_len < IPV4_MIN_HEADER_LEN {
        return None;
    }
    data.get(header_len..)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones_complement_sum(data: &[u8]) -> u16 {
        let mut sum: u32 = 0;
        for chunk in data.chunks(2) {
            let word = match chunk {
                [hi, lo] => u16::from_be_bytes([*hi, *lo]),
                [hi] => u16::from_be_bytes([*hi, 0]),
                _ => 0,
            };
            sum += u32::from(word);
        }
        while sum > 0xFFFF {
            sum = (sum & 0xFFFF) + (sum >> 16);
        }
        sum as u16
    }

    fn as_reply(mut request: Vec<u8>, reply_type: u8) -> Vec<u8> {
        request[0] = reply_type;
        request
    }

    #[test]
    fn echo_request_has_header_fields_and_size() {
        let packet = build_echo_request(0x1234, 7, DEFAULT_PAYLOAD_SIZE, false);
        assert_eq!(packet.len(), ICMP_HEADER_SIZE + DEFAULT_PAYLOAD_SIZE);
        assert_eq!(packet[0], 8);
        assert_eq!(packet[1], 0);
        assert_eq!(&packet[4..6], &0x1234u16.to_be_bytes());
        assert_eq!(&packet[6..8], &7u16.to_be_bytes());
    }

    #[test]
    fn echo_request_checksum_verifies() {
        let packet = build_echo_request(42, 1, DEFAULT_PAYLOAD_SIZE, false);
        assert_eq!(ones_complement_sum(&packet), 0xFFFF);
    }

    #[test]
    fn icmpv6_request_uses_v6_type_and_no_checksum() {
        let packet = build_echo_request(1, 2, DEFAULT_PAYLOAD_SIZE, true);
        assert_eq!(packet[0], ICMPV6_ECHO_REQUEST);
        assert_eq!(&packet[2..4], &[0, 0]);
    }

    #[test]
    fn parses_bare_echo_reply() {
        let reply = as_reply(build_echo_request(9, 3, 16, false), 0);
        assert_eq!(
            parse_echo_reply(&reply, false),
            Some(EchoReply {
                identifier: 9,
                sequence: 3
            })
        );
    }

    #[test]
    fn parses_reply_behind_ipv4_header() {
        let mut data = vec![0u8; IPV4_MIN_HEADER_LEN];
        data[0] = 0x45;
        data.extend(as_reply(build_echo_request(5, 11, 16, false), 0));
        let reply = parse_echo_reply(&data, false).expect("reply");
        assert_eq!(reply.sequence, 11);
    }

    #[test]
    fn parses_icmpv6_reply() {
        let reply = as_reply(build_echo_request(4, 8, 16, true), ICMPV6_ECHO_REPLY);
        assert_eq!(parse_echo_reply(&reply, true).map(|r| r.sequence), Some(8));
    }

    #[test]
    fn ignores_echo_requests_and_truncated_data() {
        let request = build_echo_request(1, 1, 16, false);
        assert_eq!(parse_echo_reply(&request, false), None);
        assert_eq!(parse_echo_reply(&[0, 0, 0], false), None);
        assert_eq!(parse_echo_reply(&[], false), None);
    }

    #[test]
    fn rejects_ipv4_header_with_bogus_length() {
        let mut data = vec![0u8; 28];
        data[0] = 0x41;
        assert_eq!(parse_echo_reply(&data, false), None);
    }
}

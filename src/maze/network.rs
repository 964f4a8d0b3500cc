use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Taille maximale du contenu d'un message, dans les deux sens.
pub const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Envoie un message : taille sur 4 octets (little endian) puis le texte.
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let message_bytes = message.as_bytes();
    let size = u32::try_from(message_bytes.len())
        .ok()
        .filter(|&size| size <= MAX_MESSAGE_SIZE)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "message too large"))?;
    stream.write_u32::<LittleEndian>(size)?;
    stream.write_all(message_bytes)?;
    stream.flush()
}

/// Reçoit un message
///
/// La taille annoncée est vérifiée avant toute allocation : un cadre plus
/// grand que `MAX_MESSAGE_SIZE` est refusé sans lire son contenu.
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    let size = stream.read_u32::<LittleEndian>()?;
    if size > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Frame of {} bytes exceeds {} bytes", size, MAX_MESSAGE_SIZE),
        ));
    }
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid data: {}", e))
    })
}

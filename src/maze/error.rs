//! Erreurs renvoyées à la frontière de la session (index hors grille, etc.).

use thiserror::Error;

/// Erreurs possibles lors d'un accès à la carte ou à l'état de la souris.
///
/// Elles ne surviennent qu'à partir de valeurs brutes fournies par l'hôte :
/// une exploration normale ne les produit jamais.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Index de cellule hors de 0..16.
    #[error("invalid cell index: {0} (expected 0..16)")]
    InvalidCell(usize),

    /// Direction hors de 0..4.
    #[error("invalid direction: {0} (expected 0..4)")]
    InvalidDirection(u8),

    /// Code de mur autre que 0 (ouvert), 1 (mur) ou 2 (inconnu).
    #[error("invalid wall state: {0} (expected 0, 1 or 2)")]
    InvalidWallState(u8),

    /// Nom de labyrinthe de référence inconnu.
    #[error("unknown layout: {0}")]
    UnknownLayout(String),
}

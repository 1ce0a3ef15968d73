//! Static page content shown as carousel cards.

/// One card on the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

const OPEN: &[&str] = &["9:00 - 18:00"];
const CLOSED: &[&str] = &["FECHADO"];

static CARDS: &[Card] = &[
    Card {
        title: "DN BARBER SHOP",
        lines: &["Tradição encontra", "modernidade.", "", "Agende seu horário"],
    },
    Card {
        title: "SEU BARBEIRO",
        lines: &["Olá, me chamo", "Davi Nunes.", "", "Corte é experiência."],
    },
    Card {
        title: "SEGUNDA",
        lines: OPEN,
    },
    Card {
        title: "TERÇA",
        lines: OPEN,
    },
    Card {
        title: "QUARTA",
        lines: OPEN,
    },
    Card {
        title: "QUINTA",
        lines: OPEN,
    },
    Card {
        title: "SEXTA",
        lines: OPEN,
    },
    Card {
        title: "SÁBADO",
        lines: OPEN,
    },
    Card {
        title: "DOMINGO",
        lines: CLOSED,
    },
];

pub fn cards() -> &'static [Card] {
    CARDS
}

//! 대시보드 페이지 - 카드 8개 (4개씩 2행)

use crate::models::page::CardType;

/// 그리드 열 수
pub const GRID_COLUMNS: usize = 4;

/// 카드 표시 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub card_type: CardType,
    pub icon: &'static str,
}

impl Card {
    pub fn new(card_type: CardType) -> Self {
        Self {
            card_type,
            icon: card_type.icon(),
        }
    }

    pub fn title_key(&self) -> String {
        self.card_type.title_key()
    }

    pub fn description_key(&self) -> String {
        self.card_type.description_key()
    }
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    cards: Vec<Card>,
    /// 선택된 카드 인덱스 (행 우선)
    selected: usize,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            cards: CardType::ALL.into_iter().map(Card::new).collect(),
            selected: 0,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_card(&self) -> CardType {
        self.cards[self.selected].card_type
    }

    /// 선택된 카드 클릭 - 열어야 할 카드 종류 반환
    pub fn activate(&self) -> CardType {
        let card = self.selected_card();
        tracing::debug!(card = card.id(), "card activated");
        card
    }

    pub fn move_left(&mut self) {
        if self.selected % GRID_COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.selected % GRID_COLUMNS < GRID_COLUMNS - 1 && self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= GRID_COLUMNS {
            self.selected -= GRID_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + GRID_COLUMNS < self.cards.len() {
            self.selected += GRID_COLUMNS;
        }
    }
}

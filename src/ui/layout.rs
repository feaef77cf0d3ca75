// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 90+ cols: 전체 사이드바 (아이콘 + 레이블)
// - 60-89 cols: 축소 사이드바 (아이콘만)
// - <60 cols 또는 <16 rows: 경고 메시지 표시
//
// RTL 언어에서는 사이드바가 오른쪽에 놓인다.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;
pub const FULL_SIDEBAR_MIN_WIDTH: u16 = 90;

/// 사이드바 너비
pub const SIDEBAR_WIDTH: u16 = 24;
pub const COMPACT_SIDEBAR_WIDTH: u16 = 6;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 전체 사이드바 (90+ cols)
    Full,
    /// 아이콘만 보이는 사이드바 (60-89 cols)
    Compact,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 키보드 포커스 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    Sidebar,
    #[default]
    Content,
}

impl FocusArea {
    /// 포커스 전환
    pub fn toggle(&mut self) {
        *self = match self {
            FocusArea::Sidebar => FocusArea::Content,
            FocusArea::Content => FocusArea::Sidebar,
        };
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    pub sidebar: Rect,
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub focus: FocusArea,
    /// 사이드바를 오른쪽에 배치
    pub rtl: bool,
    pub terminal_size: (u16, u16),
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Full,
            focus: FocusArea::default(),
            rtl: false,
            terminal_size: (120, 32),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < FULL_SIDEBAR_MIN_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Full
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = self.calculate_areas(area);
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        let sidebar_width = match self.state.mode {
            LayoutMode::TooSmall => {
                return LayoutAreas {
                    warning: area,
                    ..Default::default()
                }
            }
            LayoutMode::Compact => COMPACT_SIDEBAR_WIDTH,
            LayoutMode::Full => SIDEBAR_WIDTH,
        };

        // 메인 수직 레이아웃: 본문 | 상태바 | 커맨드바
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // 사이드바 + 탭 영역
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);

        let sidebar_constraint = Constraint::Length(sidebar_width);
        let body_constraint = Constraint::Min(10);
        let constraints = if self.state.rtl {
            [body_constraint, sidebar_constraint]
        } else {
            [sidebar_constraint, body_constraint]
        };
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(vertical_chunks[0]);
        let (sidebar, body) = if self.state.rtl {
            (horizontal[1], horizontal[0])
        } else {
            (horizontal[0], horizontal[1])
        };

        // 본문: 탭 바 | 페이지 내용
        let body_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(body);

        LayoutAreas {
            sidebar,
            tab_bar: body_chunks[0],
            content: body_chunks[1],
            status_bar: vertical_chunks[1],
            command_bar: vertical_chunks[2],
            warning: Rect::default(),
        }
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    pub fn focus(&self) -> FocusArea {
        self.state.focus
    }

    pub fn toggle_focus(&mut self) {
        self.state.focus.toggle();
    }

    pub fn set_focus(&mut self, focus: FocusArea) {
        self.state.focus = focus;
    }

    /// 사이드바 좌우 배치 (다음 `update`부터 반영)
    pub fn set_rtl(&mut self, rtl: bool) {
        self.state.rtl = rtl;
    }

    pub fn is_rtl(&self) -> bool {
        self.state.rtl
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    pub fn is_compact(&self) -> bool {
        matches!(self.state.mode, LayoutMode::Compact)
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.state.mode, LayoutMode::TooSmall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(120, 30), LayoutMode::Full);
        assert_eq!(LayoutManager::determine_mode(90, 16), LayoutMode::Full);
        assert_eq!(LayoutManager::determine_mode(89, 24), LayoutMode::Compact);
        assert_eq!(LayoutManager::determine_mode(60, 24), LayoutMode::Compact);
        assert_eq!(LayoutManager::determine_mode(59, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(120, 15), LayoutMode::TooSmall);
    }

    #[test]
    fn test_ltr_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 120, 30));
        let areas = manager.areas();
        assert_eq!(areas.sidebar, Rect::new(0, 0, SIDEBAR_WIDTH, 28));
        assert_eq!(areas.tab_bar.x, SIDEBAR_WIDTH);
        assert_eq!(areas.tab_bar.height, 1);
        assert_eq!(areas.content.y, 1);
        assert_eq!(areas.status_bar.y, 28);
        assert_eq!(areas.command_bar.y, 29);
    }

    #[test]
    fn test_rtl_moves_sidebar_right() {
        let mut manager = LayoutManager::new();
        manager.set_rtl(true);
        manager.update(Rect::new(0, 0, 120, 30));
        let areas = manager.areas();
        assert_eq!(areas.sidebar.x, 120 - SIDEBAR_WIDTH);
        assert_eq!(areas.content.x, 0);
    }

    #[test]
    fn test_compact_and_too_small() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 70, 20));
        assert!(manager.is_compact());
        assert_eq!(manager.areas().sidebar.width, COMPACT_SIDEBAR_WIDTH);

        manager.update(Rect::new(0, 0, 40, 10));
        assert!(manager.is_too_small());
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 40, 10));
        assert_eq!(manager.terminal_size(), (40, 10));
    }

    #[test]
    fn test_toggle_focus() {
        let mut manager = LayoutManager::new();
        assert_eq!(manager.focus(), FocusArea::Content);
        manager.toggle_focus();
        assert_eq!(manager.focus(), FocusArea::Sidebar);
        manager.toggle_focus();
        assert_eq!(manager.focus(), FocusArea::Content);
    }
}

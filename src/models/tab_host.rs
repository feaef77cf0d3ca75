use crate::models::page::PageKey;
use crate::utils::error::{NovaSeoError, Result};

/// 열린 페이지 탭
#[derive(Debug)]
pub struct Tab<P> {
    /// 페이지 식별자
    pub key: PageKey,
    /// 현재 언어 기준 제목 (언어 변경 시 갱신)
    pub title: String,
    /// 논리 아이콘 이름
    pub icon: &'static str,
    /// 탭이 소유한 페이지 인스턴스
    pub page: P,
}

/// 탭 목록 관리자
///
/// 0번 탭은 닫을 수 없고, 기본 페이지는 탭이 하나만 존재한다.
#[derive(Debug)]
pub struct TabHost<P> {
    tabs: Vec<Tab<P>>,
    /// 현재 탭 인덱스 (탭이 없으면 0)
    current: usize,
}

impl<P> Default for TabHost<P> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            current: 0,
        }
    }
}

impl<P> TabHost<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 페이지 열기
    ///
    /// 중복 불가 키가 이미 열려 있으면 그 탭으로 전환만 하고 인덱스를 반환한다.
    /// 새 탭이 필요할 때만 `make_page`로 페이지를 생성한다.
    pub fn open<F>(&mut self, key: PageKey, title: String, icon: &'static str, make_page: F) -> usize
    where
        F: FnOnce() -> P,
    {
        if key.is_unique() {
            if let Some(index) = self.index_of(key) {
                self.current = index;
                tracing::debug!(?key, index, "focused existing tab");
                return index;
            }
        }

        self.tabs.push(Tab {
            key,
            title,
            icon,
            page: make_page(),
        });
        self.current = self.tabs.len() - 1;
        tracing::debug!(?key, index = self.current, "opened tab");
        self.current
    }

    /// 탭 닫기
    ///
    /// 0번 탭이면 탭 개수와 관계없이 `Ok(false)`, 범위 밖이면 에러.
    /// 닫힌 탭의 페이지는 drop된다.
    pub fn close(&mut self, index: usize) -> Result<bool> {
        if index == 0 {
            return Ok(false);
        }
        self.check_index(index)?;

        let removed = self.tabs.remove(index);
        if index < self.current {
            self.current -= 1;
        } else if self.current >= self.tabs.len() {
            self.current = self.tabs.len() - 1;
        }
        tracing::debug!(key = ?removed.key, index, current = self.current, "closed tab");
        Ok(true)
    }

    /// 현재 탭 인덱스
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 현재 탭 변경 (범위 밖이면 에러, 보정하지 않음)
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.current = index;
        Ok(())
    }

    /// 언어 변경 후 모든 탭 제목 재계산
    ///
    /// 탭 수, 순서, 현재 인덱스는 그대로 유지된다.
    pub fn rename_on_locale_change<F>(&mut self, mut title_of: F)
    where
        F: FnMut(PageKey) -> String,
    {
        for tab in &mut self.tabs {
            tab.title = title_of(tab.key);
        }
    }

    /// 다음 탭 (순환)
    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.current = (self.current + 1) % self.tabs.len();
        }
    }

    /// 이전 탭 (순환)
    pub fn prev_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        if self.current == 0 {
            self.current = self.tabs.len() - 1;
        } else {
            self.current -= 1;
        }
    }

    pub fn current(&self) -> Option<&Tab<P>> {
        self.tabs.get(self.current)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut P> {
        self.tabs.get_mut(self.current).map(|tab| &mut tab.page)
    }

    pub fn get(&self, index: usize) -> Option<&Tab<P>> {
        self.tabs.get(index)
    }

    pub fn tabs(&self) -> &[Tab<P>] {
        &self.tabs
    }

    pub fn pages_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.tabs.iter_mut().map(|tab| &mut tab.page)
    }

    /// 키로 탭 검색 (첫 번째 일치)
    pub fn index_of(&self, key: PageKey) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.key == key)
    }

    /// 탭 제목 목록
    pub fn titles(&self) -> Vec<String> {
        self.tabs.iter().map(|tab| tab.title.clone()).collect()
    }

    /// 탭 개수
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(NovaSeoError::IndexOutOfBounds {
                index,
                len: self.tabs.len(),
            })
        }
    }
}

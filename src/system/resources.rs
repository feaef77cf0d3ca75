//! 정적 리소스 로더
//!
//! 시작 시 한 번 `themes/themes.json` 과 `locales/<code>.json` 을 읽는다.
//! 파일이 없거나 깨져 있어도 앱은 계속 동작한다: 경고를 남기고
//! 내장 Cyber 테마 / 빈 언어 팩으로 대체한다.

use crate::ui::i18n::{Language, LanguagePack};
use crate::ui::theme::Theme;
use crate::utils::error::{NovaSeoError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const THEMES_FILE: &str = "themes/themes.json";
pub const LOCALES_DIR: &str = "locales";

/// 후보 중 실제로 존재하는 첫 리소스 디렉토리
pub fn find_resources_dir(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| dir.join(THEMES_FILE).is_file() || dir.join(LOCALES_DIR).is_dir())
        .cloned()
}

/// 테마 문서 파싱 (정의 순서 유지)
pub fn parse_themes(content: &str) -> Result<Vec<(String, Theme)>> {
    let document: Map<String, Value> = serde_json::from_str(content)?;
    document
        .into_iter()
        .map(|(name, value)| {
            let theme: Theme = serde_json::from_value(value)?;
            Ok((name, theme))
        })
        .collect()
}

/// 테마 파일 로드
pub fn read_themes(path: &Path) -> Result<Vec<(String, Theme)>> {
    let content = fs::read_to_string(path)?;
    parse_themes(&content)
}

/// 리소스 디렉토리에서 테마 로드. 실패 시 빈 목록(=내장 테마).
pub fn load_themes(resources_dir: Option<&Path>) -> Vec<(String, Theme)> {
    let Some(dir) = resources_dir else {
        tracing::warn!("no resources directory, using built-in theme");
        return Vec::new();
    };
    let path = dir.join(THEMES_FILE);
    match read_themes(&path) {
        Ok(themes) => {
            tracing::info!(path = %path.display(), count = themes.len(), "themes loaded");
            themes
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load themes, using built-in theme");
            Vec::new()
        }
    }
}

/// 언어 팩 문서 파싱
///
/// 평면 `"a.b": "..."` 형식이 기본이며, 중첩 객체는 점 경로로 펼친다.
pub fn parse_language_pack(code: &str, content: &str) -> Result<LanguagePack> {
    let document: Value = serde_json::from_str(content)?;
    let Value::Object(root) = document else {
        return Err(NovaSeoError::Config(format!(
            "language pack '{}' must be a JSON object",
            code
        )));
    };

    let mut entries = HashMap::new();
    flatten_into(String::new(), root, &mut entries);
    Ok(LanguagePack::new(code, entries))
}

fn flatten_into(prefix: String, object: Map<String, Value>, out: &mut HashMap<String, String>) {
    for (key, value) in object {
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::String(text) => {
                out.insert(path, text);
            }
            Value::Object(children) => flatten_into(path, children, out),
            Value::Array(lines) => {
                let joined: Vec<String> = lines
                    .into_iter()
                    .filter_map(|line| line.as_str().map(str::to_string))
                    .collect();
                out.insert(path, joined.join("\n"));
            }
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}

/// 언어 팩 파일 로드
pub fn read_language_pack(path: &Path, code: &str) -> Result<LanguagePack> {
    let content = fs::read_to_string(path)?;
    parse_language_pack(code, &content)
}

/// 지원 언어 전체 로드. 로드 실패한 언어는 빠지며(스토어가 빈 팩으로 채움) 경고만 남긴다.
pub fn load_language_packs(resources_dir: Option<&Path>) -> Vec<LanguagePack> {
    let Some(dir) = resources_dir else {
        tracing::warn!("no resources directory, translations unavailable");
        return Vec::new();
    };

    Language::ALL
        .into_iter()
        .filter_map(|language| {
            let path = dir
                .join(LOCALES_DIR)
                .join(format!("{}.json", language.code()));
            match read_language_pack(&path, language.code()) {
                Ok(pack) => {
                    tracing::debug!(code = language.code(), keys = pack.len(), "language pack loaded");
                    Some(pack)
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load language pack");
                    None
                }
            }
        })
        .collect()
}

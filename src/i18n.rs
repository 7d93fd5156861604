//! Display languages, per-language text values and the built-in UI strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "JP")]
    Jp,
    #[serde(rename = "KR")]
    Kr,
    #[serde(rename = "EN")]
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Jp, Language::Kr, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Jp => "JP",
            Language::Kr => "KR",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lookup order after the requested language.
const FALLBACK_ORDER: [Language; 3] = [Language::Jp, Language::En, Language::Kr];

/// A text field stored either as one string or as `{JP, KR, EN}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    PerLanguage(BTreeMap<String, String>),
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        LocalizedText::Plain(value.to_string())
    }
}

impl LocalizedText {
    /// All three languages present and blank; the shape the editor writes.
    pub fn empty() -> Self {
        LocalizedText::PerLanguage(
            Language::ALL
                .iter()
                .map(|lang| (lang.code().to_string(), String::new()))
                .collect(),
        )
    }

    /// Text for display. A plain string is used as-is; a mapping tries the
    /// requested language, then JP, EN, KR, then any non-empty value.
    pub fn resolve(&self, lang: Language) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::PerLanguage(map) => {
                let non_empty = |code: &str| map.get(code).filter(|text| !text.is_empty());
                std::iter::once(lang)
                    .chain(FALLBACK_ORDER)
                    .find_map(|candidate| non_empty(candidate.code()))
                    .or_else(|| map.values().find(|text| !text.is_empty()))
                    .map(String::as_str)
                    .unwrap_or("")
            }
        }
    }

    /// Exact value for one language, without fallback (editor inputs).
    pub fn get(&self, lang: Language) -> &str {
        match self {
            LocalizedText::Plain(text) => text,
            LocalizedText::PerLanguage(map) => map.get(lang.code()).map(String::as_str).unwrap_or(""),
        }
    }

    /// Set one language. A plain string is first spread to every language so
    /// the other inputs keep showing it.
    pub fn set(&mut self, lang: Language, value: String) {
        if let LocalizedText::Plain(text) = self {
            *self = LocalizedText::spread(text);
        }
        if let LocalizedText::PerLanguage(map) = self {
            map.insert(lang.code().to_string(), value);
        }
    }

    /// Editor view of a stored value: always the per-language shape.
    pub fn for_editing(stored: Option<&LocalizedText>) -> LocalizedText {
        match stored {
            None => LocalizedText::empty(),
            Some(LocalizedText::Plain(text)) => LocalizedText::spread(text),
            Some(LocalizedText::PerLanguage(map)) => LocalizedText::PerLanguage(
                Language::ALL
                    .iter()
                    .map(|lang| {
                        let code = lang.code().to_string();
                        let value = map.get(&code).cloned().unwrap_or_default();
                        (code, value)
                    })
                    .collect(),
            ),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.resolve(Language::Jp).trim().is_empty()
    }

    fn spread(text: &str) -> LocalizedText {
        LocalizedText::PerLanguage(
            Language::ALL
                .iter()
                .map(|lang| (lang.code().to_string(), text.to_string()))
                .collect(),
        )
    }
}

/// Built-in UI strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NavHome,
    NavNews,
    NavAbout,
    NavInfo,
    NavShop,
    NavAdmin,
    ShopModalTitle,
    ShopClose,
    HeroTitle,
    HeroSubtitle,
    NewsTitle,
    NewsEmpty,
    NewsLoading,
    AboutTitle,
    AboutDesc1,
    AboutDesc2,
    InfoTitle,
    InfoHoursLabel,
    InfoHoursValue,
    InfoLocLabel,
    InfoLocValue,
    InfoHolidayClosed,
    InfoTodayClosed,
    InfoClosedDays,
    AdminTitle,
    AdminSignedOut,
    AdminBack,
    AdminTabNews,
    AdminTabInfo,
    AdminTabHero,
    AdminNewsNew,
    AdminNewsEdit,
    AdminNewsExisting,
    AdminLabelTitle,
    AdminLabelContent,
    AdminLabelImage,
    AdminBtnSubmit,
    AdminBtnSave,
    AdminBtnCancel,
    AdminBtnDelete,
    AdminBtnEdit,
    AdminMsgUploading,
    AdminMsgSaving,
    AdminMsgSuccessNews,
    AdminMsgSuccessInfo,
    AdminMsgUpdated,
    AdminMsgDeleted,
    AdminInfoLogo,
    AdminLabelEnableMultiLang,
    AdminHoursSchedule,
    AdminHoursAdd,
    AdminHoursDays,
    AdminHoursTime,
    AdminLabelHoliday,
    AdminLabelTodayClosed,
    AdminSecAddress,
    AdminLabelZip,
    AdminLabelPrefecture,
    AdminLabelCity,
    AdminLabelStreet,
    AdminSecContact,
    AdminLabelPhone,
    AdminLabelEmail,
    AdminHeroImage,
    AdminAboutImage,
    AdminPreview,
}

/// Look up a built-in string.
pub fn tr(label: Label, lang: Language) -> &'static str {
    let (jp, kr, en) = entries(label);
    match lang {
        Language::Jp => jp,
        Language::Kr => kr,
        Language::En => en,
    }
}

fn entries(label: Label) -> (&'static str, &'static str, &'static str) {
    use Label::*;
    match label {
        NavHome => ("HOME", "홈", "HOME"),
        NavNews => ("NEWS", "뉴스", "NEWS"),
        NavAbout => ("ABOUT", "소개", "ABOUT"),
        NavInfo => ("INFO", "정보", "INFO"),
        NavShop => ("SHOP", "쇼핑", "SHOP"),
        NavAdmin => ("ADMIN", "관리자", "ADMIN"),
        ShopModalTitle => ("オンラインショップ", "온라인 샵", "Online Shops"),
        ShopClose => ("閉じる", "닫기", "Close"),
        HeroTitle => (
            "職人の手で、\n心を込めて。",
            "장인의 손길로,\n마음을 담아.",
            "Crafted with\nHeart & Soul.",
        ),
        HeroSubtitle => (
            "厳選された素材と、長年培われた技術。\nあなただけの特別な一品をお届けします。",
            "엄선된 소재와 오랜 시간 쌓아온 기술.\n당신만을 위한 특별한 제품을 전해드립니다.",
            "Selected materials and years of honed skills.\nWe deliver a special piece just for you.",
        ),
        NewsTitle => ("最新情報", "최신 소식", "Latest News"),
        NewsEmpty => (
            "新しいお知らせはありません。",
            "새로운 소식이 없습니다.",
            "No new updates.",
        ),
        NewsLoading => ("読み込み中...", "불러오는 중...", "Loading..."),
        AboutTitle => ("私たちの想い", "우리의 철학", "Our Philosophy"),
        AboutDesc1 => (
            "工房では、一つひとつの製品に物語を込めて製作しています。\n使うほどに手に馴染み、時と共に深まる味わいをお楽しみください。",
            "공방에서는 하나하나의 제품에 이야기를 담아 제작합니다.\n쓸수록 손에 익숙해지고, 시간과 함께 깊어지는 멋을 즐겨보세요.",
            "In our workshop, we craft each product with a story.\nEnjoy the texture settling into your hand and deepening with time.",
        ),
        AboutDesc2 => (
            "「長く愛されるものづくり」をテーマに、\n修理やメンテナンスも承っております。",
            "「오래 사랑받는 물건 만들기」를 테마로,\n수리나 유지보수도 하고 있습니다.",
            "With the theme of \"Making things loved for a long time\",\nwe also accept repairs and maintenance.",
        ),
        InfoTitle => ("店舗情報", "매장 정보", "Information"),
        InfoHoursLabel => ("営業時間", "영업 시간", "Hours"),
        InfoHoursValue => (
            "10:00 - 18:00 (水曜定休)",
            "10:00 - 18:00 (수요일 휴무)",
            "10:00 - 18:00 (Closed Wed)",
        ),
        InfoLocLabel => ("住所", "주소", "Address"),
        InfoLocValue => (
            "東京都渋谷区神宮前 1-2-3",
            "도쿄도 시부야구 진구마에 1-2-3",
            "1-2-3 Jingumae, Shibuya-ku, Tokyo",
        ),
        InfoHolidayClosed => ("※ 祝日休業", "* 공휴일 휴무", "* Holiday Closed"),
        InfoTodayClosed => ("本日休業", "금일 휴무", "Today Closed"),
        InfoClosedDays => ("定休日", "휴무일", "Closed"),
        AdminTitle => ("管理者ダッシュボード", "관리자 대시보드", "Admin Dashboard"),
        AdminSignedOut => (
            "管理者としてログインしていません。",
            "관리자로 로그인되어 있지 않습니다.",
            "Not signed in as an administrator.",
        ),
        AdminBack => ("サイトに戻る", "사이트로 돌아가기", "Back to site"),
        AdminTabNews => ("ニュース管理", "뉴스 관리", "News Management"),
        AdminTabInfo => ("基本情報設定", "기본 정보 설정", "General Settings"),
        AdminTabHero => ("ヒーロー & 紹介", "히어로 & 소개", "Hero & About"),
        AdminNewsNew => ("記事作成", "새 글 작성", "Create Post"),
        AdminNewsEdit => ("記事編集", "글 수정", "Edit News"),
        AdminNewsExisting => ("登録済みの記事", "등록된 뉴스", "Existing News"),
        AdminLabelTitle => ("タイトル", "제목", "Title"),
        AdminLabelContent => ("内容", "내용", "Content"),
        AdminLabelImage => (
            "画像添付 (自動圧縮)",
            "이미지 첨부 (자동 압축)",
            "Attach Image (Auto Compress)",
        ),
        AdminBtnSubmit => ("登録する", "등록하기", "Submit"),
        AdminBtnSave => ("保存する", "저장하기", "Save Changes"),
        AdminBtnCancel => ("キャンセル", "취소", "Cancel"),
        AdminBtnDelete => ("削除", "삭제", "Delete"),
        AdminBtnEdit => ("編集", "수정", "Edit"),
        AdminMsgUploading => ("登録中...", "등록 중...", "Uploading..."),
        AdminMsgSaving => ("保存中...", "저장 중...", "Saving..."),
        AdminMsgSuccessNews => (
            "ニュースが登録されました。",
            "뉴스가 성공적으로 등록되었습니다.",
            "News posted successfully.",
        ),
        AdminMsgSuccessInfo => (
            "情報が保存されました。",
            "정보가 저장되었습니다.",
            "Settings saved successfully.",
        ),
        AdminMsgUpdated => ("更新完了", "수정 완료되었습니다.", "Update Complete"),
        AdminMsgDeleted => ("削除しました。", "삭제되었습니다.", "Deleted."),
        AdminInfoLogo => ("ロゴ変更", "로고 변경", "Change Logo"),
        AdminLabelEnableMultiLang => (
            "多言語機能の有効化",
            "다국어 기능 활성화",
            "Enable Multilingual Support",
        ),
        AdminHoursSchedule => ("営業スケジュール", "영업 스케줄", "Business Schedule"),
        AdminHoursAdd => ("追加", "추가", "Add"),
        AdminHoursDays => ("1. 曜日を選択 (複数可)", "1. 요일 선택 (중복 가능)", "1. Select Days"),
        AdminHoursTime => ("2. 時間を入力", "2. 시간 입력", "2. Enter Time"),
        AdminLabelHoliday => ("祝日休業を表示", "공휴일 휴무 표시", "Show Holiday Closed"),
        AdminLabelTodayClosed => (
            "本日は臨時休業",
            "금일 비상 휴무",
            "Emergency: TODAY CLOSED",
        ),
        AdminSecAddress => ("住所設定 (JP形式)", "주소 설정 (JP 형식)", "Address Settings (JP Format)"),
        AdminLabelZip => ("郵便番号", "우편번호", "Zip Code"),
        AdminLabelPrefecture => ("都道府県", "도도부현", "Prefecture"),
        AdminLabelCity => ("市区町村", "시구정촌", "City / Ward"),
        AdminLabelStreet => ("番地・建物名", "나머지 주소", "Street details"),
        AdminSecContact => ("連絡先情報", "연락처 정보", "Contact Info"),
        AdminLabelPhone => ("電話番号", "전화번호", "Phone"),
        AdminLabelEmail => ("メールアドレス", "이메일", "Email"),
        AdminHeroImage => ("ヒーロー画像", "히어로 이미지", "Hero Image"),
        AdminAboutImage => ("紹介画像", "소개 이미지", "About Image"),
        AdminPreview => (
            "ライブプレビュー (ホイールで操作)",
            "라이브 미리보기 (휠로 조작)",
            "Live preview (scroll to scrub)",
        ),
    }
}

/// Short weekday label for schedule keys `Mon`..`Sun`; unknown keys pass
/// through.
pub fn day_label(day: &str, lang: Language) -> &str {
    let labels: Option<(&'static str, &'static str)> = match day {
        "Mon" => Some(("月", "월")),
        "Tue" => Some(("火", "화")),
        "Wed" => Some(("水", "수")),
        "Thu" => Some(("木", "목")),
        "Fri" => Some(("金", "금")),
        "Sat" => Some(("土", "토")),
        "Sun" => Some(("日", "일")),
        _ => None,
    };
    match (labels, lang) {
        (Some((jp, _)), Language::Jp) => jp,
        (Some((_, kr)), Language::Kr) => kr,
        _ => day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_language(pairs: &[(&str, &str)]) -> LocalizedText {
        LocalizedText::PerLanguage(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn plain_text_ignores_language() {
        let text = LocalizedText::from("Open");
        assert_eq!(text.resolve(Language::Kr), "Open");
    }

    #[test]
    fn mapping_falls_back_jp_then_en_then_kr() {
        let text = per_language(&[("JP", "日本"), ("EN", "English"), ("KR", "한국")]);
        assert_eq!(text.resolve(Language::Kr), "한국");

        let text = per_language(&[("JP", ""), ("EN", "English"), ("KR", "")]);
        assert_eq!(text.resolve(Language::Kr), "English");

        let text = per_language(&[("KR", "한국")]);
        assert_eq!(text.resolve(Language::En), "한국");

        let text = per_language(&[("FR", "Bonjour")]);
        assert_eq!(text.resolve(Language::Jp), "Bonjour");

        assert_eq!(LocalizedText::empty().resolve(Language::Jp), "");
    }

    #[test]
    fn deserializes_both_shapes() {
        let plain: LocalizedText = serde_json::from_str("\"hello\"").expect("plain");
        assert_eq!(plain, LocalizedText::from("hello"));

        let mapped: LocalizedText =
            serde_json::from_str(r#"{"JP":"こんにちは","EN":"hello"}"#).expect("mapped");
        assert_eq!(mapped.resolve(Language::En), "hello");
    }

    #[test]
    fn setting_one_language_spreads_plain_text_first() {
        let mut text = LocalizedText::from("Sale");
        text.set(Language::Kr, "세일".to_string());
        assert_eq!(text.get(Language::Jp), "Sale");
        assert_eq!(text.get(Language::En), "Sale");
        assert_eq!(text.get(Language::Kr), "세일");
    }

    #[test]
    fn editing_shape_has_every_language() {
        let edit = LocalizedText::for_editing(Some(&per_language(&[("JP", "a")])));
        assert_eq!(edit, per_language(&[("JP", "a"), ("KR", ""), ("EN", "")]));
        assert_eq!(LocalizedText::for_editing(None), LocalizedText::empty());
    }

    #[test]
    fn language_codes_round_trip_through_serde() {
        let json = serde_json::to_string(&Language::En).expect("serialize");
        assert_eq!(json, "\"EN\"");
        let back: Language = serde_json::from_str("\"KR\"").expect("deserialize");
        assert_eq!(back, Language::Kr);
    }

    #[test]
    fn day_labels_follow_language() {
        assert_eq!(day_label("Wed", Language::Jp), "水");
        assert_eq!(day_label("Wed", Language::Kr), "수");
        assert_eq!(day_label("Wed", Language::En), "Wed");
        assert_eq!(day_label("Holiday", Language::Jp), "Holiday");
    }
}

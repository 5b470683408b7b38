//! Static lookup tables for Chinese-to-identifier translation.
//!
//! Three layers, consulted in order by the translator:
//! - `PHRASE_MAP`: whole strings that map straight to a finished key stem
//! - `WORD_MAP`: common words and proper nouns with real English translations
//! - `CHAR_MAP`: single-character fallback (surnames and given-name characters
//!   as pinyin, plus per-character glosses used when splitting compounds)

use std::{collections::HashMap, sync::LazyLock};

/// Whole-string mappings that already include their key suffix.
static PHRASE_PAIRS: &[(&str, &str)] = &[
    ("婴儿名字", "baby_names_title"),
    ("名字列表", "name_list_title"),
    ("流行名字", "popular_names_title"),
    ("名人名字", "famous_names_title"),
    ("城市列表", "city_list_title"),
    ("产品列表", "product_list_title"),
    ("菜单项", "menu_items_title"),
    ("首页", "home_page"),
    ("关于我们", "about_us"),
    ("联系我们", "contact_us"),
    ("产品中心", "product_center"),
    ("新闻动态", "news"),
    ("服务支持", "service_support"),
];

static WORD_PAIRS: &[(&str, &str)] = &[
    // Common vocabulary
    ("婴儿", "baby"),
    ("名字", "name"),
    ("标题", "title"),
    ("列表", "list"),
    ("流行", "popular"),
    ("名人", "famous"),
    ("城市", "city"),
    ("菜单", "menu"),
    ("项", "item"),
    ("产品", "product"),
    ("中心", "center"),
    ("首页", "home"),
    ("页", "page"),
    ("关于", "about"),
    ("我们", "us"),
    ("联系", "contact"),
    ("新闻", "news"),
    ("动态", "dynamic"),
    ("服务", "service"),
    ("支持", "support"),
    // Products
    ("苹果", "apple"),
    ("手机", "phone"),
    ("华为", "huawei"),
    ("平板", "tablet"),
    ("小米", "xiaomi"),
    ("电视", "tv"),
    ("联想", "lenovo"),
    ("电脑", "computer"),
    ("戴尔", "dell"),
    ("笔记本", "laptop"),
    ("三星", "samsung"),
    ("显示器", "monitor"),
    // Cities
    ("北京", "beijing"),
    ("上海", "shanghai"),
    ("广州", "guangzhou"),
    ("深圳", "shenzhen"),
    ("杭州", "hangzhou"),
    ("成都", "chengdu"),
    ("武汉", "wuhan"),
    ("西安", "xian"),
    ("南京", "nanjing"),
    ("重庆", "chongqing"),
];

static CHAR_PAIRS: &[(&str, &str)] = &[
    // Common surnames
    ("张", "zhang"),
    ("李", "li"),
    ("王", "wang"),
    ("刘", "liu"),
    ("陈", "chen"),
    ("赵", "zhao"),
    ("周", "zhou"),
    ("吴", "wu"),
    ("孙", "sun"),
    // Common given-name characters
    ("磊", "lei"),
    ("伟", "wei"),
    ("平", "ping"),
    ("雷", "lei"),
    ("明", "ming"),
    ("辉", "hui"),
    ("军", "jun"),
    ("莉", "li"),
    ("娜", "na"),
    ("四", "si"),
    ("霞", "xia"),
    ("洋", "yang"),
    ("八", "ba"),
    ("芳", "fang"),
    ("五", "wu"),
    ("敏", "min"),
    ("三", "san"),
    ("阳", "yang"),
    ("六", "liu"),
    ("九", "jiu"),
    ("十", "shi"),
    ("七", "qi"),
    // Per-character glosses for splitting compounds
    ("首", "first"),
    ("关", "about"),
    ("于", "for"),
    ("我", "me"),
    ("们", "s"),
    ("联", "link"),
    ("系", "relate"),
    ("产", "product"),
    ("品", "item"),
    ("中", "center"),
    ("心", "core"),
    ("新", "new"),
    ("闻", "news"),
    ("动", "dynamic"),
    ("态", "state"),
    ("服", "service"),
    ("务", "work"),
    ("支", "support"),
    ("持", "hold"),
    ("菜", "menu"),
    ("单", "list"),
];

pub static PHRASE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PHRASE_PAIRS.iter().copied().collect());

pub static WORD_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| WORD_PAIRS.iter().copied().collect());

pub static CHAR_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CHAR_PAIRS.iter().copied().collect());

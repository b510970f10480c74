//! The 404-symbol alphabet and its reverse index
//!
//! An [`Alphabet`] is an ordered list of exactly 404 distinct `char`s. The
//! position of a symbol is its base-404 digit value. Lookups in the other
//! direction go through a hash map built once at construction.

use crate::constants::ALPHABET_SIZE;
use crate::error::CodecError;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::str::FromStr;
use hashbrown::HashMap;

#[cfg(all(feature = "std", feature = "logging"))]
use tracing::debug;

/// Built-in Base404 symbol table: 404 common Chinese characters
pub const BASE404_SYMBOLS: [char; ALPHABET_SIZE] = [
    '啊', '爱', '安', '昂', '奥', '八', '白', '班', '帮', '包', '杯', '本', '蹦', '比', '边', '标',
    '别', '宾', '冰', '波', '不', '擦', '菜', '餐', '仓', '草', '册', '岑', '层', '查', '柴', '产',
    '常', '超', '车', '陈', '成', '吃', '冲', '抽', '出', '欻', '揣', '穿', '窗', '吹', '春', '戳',
    '词', '从', '凑', '粗', '窜', '催', '村', '错', '大', '代', '单', '当', '刀', '的', '得', '灯',
    '地', '嗲', '点', '调', '叠', '定', '丢', '东', '都', '读', '端', '对', '顿', '多', '鹅', '诶',
    '恩', '欸', '儿', '发', '反', '方', '飞', '分', '风', '佛', '否', '夫', '嘎', '该', '干', '刚',
    '高', '哥', '给', '根', '更', '工', '狗', '古', '瓜', '乖', '关', '光', '归', '滚', '国', '哈',
    '海', '汉', '行', '河', '黑', '很', '哼', '红', '后', '湖', '花', '坏', '欢', '黄', '回', '昏',
    '火', '鸡', '家', '间', '江', '交', '姐', '金', '京', '窘', '九', '局', '卷', '决', '军', '卡',
    '开', '看', '康', '考', '可', '肯', '坑', '空', '口', '哭', '夸', '快', '宽', '狂', '亏', '昆',
    '阔', '拉', '来', '兰', '狼', '老', '嘞', '雷', '冷', '里', '俩', '连', '凉', '聊', '列', '林',
    '灵', '流', '龙', '楼', '路', '乱', '论', '罗', '驴', '略', '妈', '卖', '满', '忙', '毛', '么',
    '没', '门', '蒙', '米', '面', '秒', '灭', '民', '名', '谬', '摸', '谋', '木', '那', '奶', '南',
    '囔', '脑', '呢', '内', '嫩', '能', '你', '年', '娘', '鸟', '捏', '您', '宁', '牛', '农', '努',
    '暖', '诺', '女', '虐', '哦', '欧', '趴', '拍', '盘', '旁', '跑', '陪', '盆', '朋', '皮', '片',
    '漂', '撇', '拼', '平', '破', '剖', '普', '七', '掐', '前', '枪', '桥', '切', '亲', '青', '穷',
    '秋', '去', '全', '却', '群', '然', '让', '绕', '热', '人', '扔', '日', '容', '肉', '如', '软',
    '瑞', '润', '若', '撒', '赛', '三', '桑', '扫', '色', '森', '僧', '沙', '晒', '山', '上', '少',
    '舌', '谁', '身', '生', '十', '手', '书', '刷', '帅', '栓', '双', '水', '顺', '说', '四', '松',
    '搜', '苏', '算', '岁', '孙', '所', '他', '太', '谈', '糖', '桃', '特', '腾', '提', '天', '条',
    '铁', '听', '同', '头', '图', '团', '推', '吞', '托', '挖', '外', '万', '王', '为', '文', '翁',
    '我', '无', '西', '下', '先', '香', '小', '写', '心', '星', '雄', '休', '需', '宣', '学', '寻',
    '鸭', '眼', '羊', '腰', '也', '一', '音', '英', '哟', '用', '有', '鱼', '元', '月', '云', '杂',
    '在', '赞', '脏', '早', '则', '贼', '怎', '增', '扎', '摘', '展', '帐', '找', '这', '真', '正',
    '知', '中', '周', '朱', '抓', '拽', '专', '装', '追', '准', '桌', '字', '总', '走', '足', '钻',
    '最', '尊', '作', '座',
];

const _: () = assert!(all_distinct(&BASE404_SYMBOLS));

const fn all_distinct(symbols: &[char]) -> bool {
    let mut i = 0;
    while i < symbols.len() {
        let mut j = i + 1;
        while j < symbols.len() {
            if symbols[i] as u32 == symbols[j] as u32 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// An immutable symbol table mapping digits 0..404 to symbols and back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Box<[char]>,
    index: HashMap<char, u16>,
    max_utf8_len: usize,
}

impl Alphabet {
    /// Build an alphabet from exactly 404 distinct symbols
    ///
    /// Fails with [`CodecError::AlphabetSize`] on a wrong symbol count and
    /// with [`CodecError::DuplicateSymbol`] if any symbol repeats, since a
    /// repeated symbol would make decoding ambiguous.
    pub fn new(symbols: &[char]) -> Result<Self, CodecError> {
        if symbols.len() != ALPHABET_SIZE {
            return Err(CodecError::AlphabetSize(symbols.len(), ALPHABET_SIZE));
        }

        let mut index: HashMap<char, u16> = HashMap::with_capacity(ALPHABET_SIZE);
        for (position, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = index.get(&symbol) {
                return Err(CodecError::DuplicateSymbol {
                    symbol,
                    first: usize::from(first),
                    second: position,
                });
            }
            index.insert(symbol, position as u16);
        }

        Ok(Self {
            symbols: symbols.into(),
            index,
            max_utf8_len: max_utf8_len(symbols),
        })
    }

    /// Build from a table already known to be valid
    fn from_validated(symbols: &[char; ALPHABET_SIZE]) -> Self {
        let index = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| (symbol, position as u16))
            .collect();

        Self {
            symbols: symbols.as_slice().into(),
            index,
            max_utf8_len: max_utf8_len(symbols),
        }
    }

    /// The built-in Base404 alphabet, shared for the lifetime of the process
    #[cfg(feature = "std")]
    pub fn standard() -> &'static Alphabet {
        static STANDARD: std::sync::OnceLock<Alphabet> = std::sync::OnceLock::new();

        STANDARD.get_or_init(|| {
            #[cfg(feature = "logging")]
            debug!("Building standard Base404 alphabet");

            Alphabet::from_validated(&BASE404_SYMBOLS)
        })
    }

    /// Symbol for `digit`
    ///
    /// # Panics
    ///
    /// Panics if `digit >= 404`. The codec only produces digits below the
    /// radix.
    pub fn symbol(&self, digit: u16) -> char {
        self.symbols[usize::from(digit)]
    }

    /// Digit value of `symbol`, if it belongs to this alphabet
    pub fn digit(&self, symbol: char) -> Option<u16> {
        self.index.get(&symbol).copied()
    }

    /// All symbols in digit order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check whether `symbol` is part of this alphabet
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Longest UTF-8 encoding of any symbol, in bytes
    pub fn max_utf8_len(&self) -> usize {
        self.max_utf8_len
    }
}

impl FromStr for Alphabet {
    type Err = CodecError;

    /// Build an alphabet from the chars of a string, in order
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        Self::new(&symbols)
    }
}

fn max_utf8_len(symbols: &[char]) -> usize {
    symbols.iter().map(|c| c.len_utf8()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_like_symbols() -> Vec<char> {
        (0..ALPHABET_SIZE as u32)
            .map(|i| char::from_u32(0x100 + i).unwrap())
            .collect()
    }

    #[test]
    fn test_builtin_table_round_trips_every_digit() {
        let alphabet = Alphabet::new(&BASE404_SYMBOLS).unwrap();

        for digit in 0..ALPHABET_SIZE as u16 {
            let symbol = alphabet.symbol(digit);
            assert_eq!(alphabet.digit(symbol), Some(digit));
        }
    }

    #[test]
    fn test_builtin_table_ends() {
        assert_eq!(BASE404_SYMBOLS[0], '啊');
        assert_eq!(BASE404_SYMBOLS[255], '穷');
        assert_eq!(BASE404_SYMBOLS[403], '座');
    }

    #[test]
    fn test_rejects_wrong_size() {
        let symbols = &BASE404_SYMBOLS[..403];
        assert_eq!(
            Alphabet::new(symbols),
            Err(CodecError::AlphabetSize(403, 404))
        );
    }

    #[test]
    fn test_rejects_duplicate() {
        let mut symbols = ascii_like_symbols();
        symbols[300] = symbols[7];

        assert_eq!(
            Alphabet::new(&symbols),
            Err(CodecError::DuplicateSymbol {
                symbol: symbols[7],
                first: 7,
                second: 300,
            })
        );
    }

    #[test]
    fn test_from_str() {
        let text: String = ascii_like_symbols().into_iter().collect();
        let alphabet: Alphabet = text.parse().unwrap();

        assert_eq!(alphabet.digit('\u{100}'), Some(0));
        assert_eq!(alphabet.digit('\u{293}'), Some(403));
        assert_eq!(alphabet.max_utf8_len(), 2);
        assert!(!alphabet.contains('A'));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_standard_matches_builtin() {
        let standard = Alphabet::standard();

        assert_eq!(standard.symbols(), &BASE404_SYMBOLS[..]);
        assert_eq!(standard.max_utf8_len(), 3);
        assert!(core::ptr::eq(standard, Alphabet::standard()));
    }
}

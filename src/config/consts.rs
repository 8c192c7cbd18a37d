// src/config/consts.rs

// Bulletin grammar
pub const REFEREE_KEYWORD: &str = "Судья";
pub const ROSTER_KEYWORD: &str = "Состав";
pub const GOALS_KEYWORD: &str = "Голы:";
pub const GOAL_KEYWORD: &str = "Гол:";
pub const DEFAULT_QUOTE: char = '"';
pub const DEFAULT_DIVIDER: &str = "–";

// Fixed edge trim around the referee name: " –" before, ". " after
pub const REFEREE_EDGE_TRIM: usize = 2;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_PLAYERS_SUBDIR: &str = "players";
pub const DEFAULT_PLAYERS_FILE: &str = "players";
pub const DEFAULT_REFEREES_FILE: &str = "referees";

pub const PLAYER_HEADERS: [&str; 4] = ["Team", "Player", "Games", "Goals"];
pub const REFEREE_HEADERS: [&str; 2] = ["Referee", "Games"];

/// Two-line bulletin used by "Load example" / `--example`.
pub const SAMPLE_BULLETIN: &str = "\
\"ЗАРЯ\" – УРАЛМАШ – 3-1 (0-1). 31.03. Ст-н Авангард. 7000 зр. Судья – Лушин. Состав:  Кубышкин, Найденко, Малыгин, Кузовлев, Рабочий, Оленев, Стульчин, Малышенко, Колесников, Куксов, Лукьянчук (Иванов, 46). Голы: Колесников 69, Малышенко 71, Куксов 74.
\"МЕТАЛЛИСТ\" – \"СКА Од\" – 2-1 (1-0). 08.05. Ст-н Металлист. 20000 зр. Судья – Ходеев. Состав: Двуреченский, Дегтярев, Поточняк, Крячко, Ледней, Шаленко (Улинец, 67), Ткаченко (Журавчак, 87), Сааков, Линке (Довбий, 88), Бачиашвили, Шеленков. – Макашвили, Николаенко, Николайшвили (Сафроненко, 46), Клыков, Умрихин, Марусин, Жарков, Смаровоз (Криштан, 46), Беланов, Корюков, Щербина (Попов, 65). Голы: Бачиашвили 15, Бачиашвили 62 – Марусин 66.
";

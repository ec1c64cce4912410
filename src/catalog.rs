//! Static translation catalog for every supported language.
//!
//! Keys are flat and dotted (`"portfolio.summary.total_value"`); values are
//! templates that may carry `{{name}}` placeholders. Each language has one
//! `const` table below; [`Catalog`] wraps them in a typed two-level lookup
//! (language first, key second) so callers never touch nested maps directly.
//!
//! The Japanese table is the complete reference catalog. Lookups for other
//! languages fall back to it, and finally to the key itself, so rendering
//! never fails even when a translation is missing.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::language::{Language, DEFAULT_LANGUAGE};

/// One language's table of `(key, template)` pairs.
pub type Entries = &'static [(&'static str, &'static str)];

// ==================== Japanese (ja) ====================

/// Japanese catalog: the complete reference table.
const JA: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "パスワード（確認）"),
    ("auth.email_placeholder", "メールアドレス"),
    ("auth.error.empty_fields", "すべての項目を入力してください"),
    ("auth.error.invalid_email", "メールアドレスの形式が正しくありません"),
    ("auth.error.password_mismatch", "パスワードが一致しません"),
    ("auth.error.password_too_short", "パスワードは8文字以上で入力してください"),
    ("auth.login.title", "ログイン"),
    ("auth.login_action", "ログイン"),
    ("auth.login_button", "ログインする"),
    ("auth.oauth_apple", "Appleで{{action}}"),
    ("auth.oauth_google", "Googleで{{action}}"),
    ("auth.or_separator", "または"),
    ("auth.password_placeholder", "パスワード"),
    ("auth.signup.title", "新規登録"),
    ("auth.signup_action", "登録"),
    ("auth.signup_button", "登録する"),
    // common
    ("common.billion", "十億"),
    ("common.data_loading", "データ取得中"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}}遅延"),
    ("common.delay_minutes", "{{minutes}}分"),
    ("common.disclaimer_badge", "本アプリは投資助言ではありません"),
    ("common.hello", "こんにちは"),
    ("common.jst", "JST"),
    ("common.million", "百万"),
    ("common.minutes_delayed", "分遅れ"),
    ("common.na", "該当なし"),
    ("common.realtime", "リアルタイム"),
    ("common.trillion", "兆"),
    // home
    ("home.subtitle", "Bridgeへようこそ"),
    ("home.title", "投資家と真実の間にある距離をゼロにする"),
    // language names (always shown in their own language)
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "保有銘柄"),
    ("portfolio.stock_list.avg_price", "平均取得単価"),
    ("portfolio.stock_list.change", "前日比"),
    ("portfolio.stock_list.current_price", "現在値"),
    ("portfolio.stock_list.empty", "保有銘柄はありません"),
    ("portfolio.stock_list.gain_loss", "損益"),
    ("portfolio.stock_list.market_value", "評価額"),
    ("portfolio.stock_list.quantity", "数量"),
    ("portfolio.summary.total_gain_loss", "評価損益"),
    ("portfolio.summary.total_gain_loss_percent", "損益率"),
    ("portfolio.summary.total_value", "資産総額"),
    ("portfolio.title", "ポートフォリオ"),
    // premium
    ("premium.badge", "プレミアム"),
    ("premium.feature_locked", "{{feature}}はプレミアム機能です。"),
    ("premium.features.advanced_charts", "高度なチャート"),
    ("premium.features.realtime_data", "リアルタイムデータ"),
    ("premium.upgrade_prompt.button_text", "今すぐアップグレード"),
    (
        "premium.upgrade_prompt.description",
        "リアルタイムデータと高度な分析機能をご利用いただけます",
    ),
    ("premium.upgrade_prompt.title", "プレミアムにアップグレード"),
    // search
    ("search.no_results", "該当する銘柄が見つかりません"),
    ("search.placeholder", "銘柄名またはティッカーを入力"),
    ("search.title", "銘柄検索"),
    // settings
    ("settings.app_version", "アプリバージョン"),
    ("settings.language_settings", "言語設定"),
    ("settings.legal_info", "法的情報"),
    ("settings.privacy_policy", "プライバシーポリシー"),
    ("settings.terms_of_service", "利用規約"),
    ("settings.title", "設定"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "配当利回り"),
    ("stock_detail.company_info.industry", "業種"),
    ("stock_detail.company_info.market_cap", "時価総額"),
    ("stock_detail.company_info.pe_ratio", "PER"),
    ("stock_detail.company_info.sector", "セクター"),
    ("stock_detail.title", "銘柄詳細"),
];

// ==================== English (en) ====================

const EN: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "Confirm password"),
    ("auth.email_placeholder", "Email address"),
    ("auth.error.empty_fields", "Please fill in all fields"),
    ("auth.error.invalid_email", "Please enter a valid email address"),
    ("auth.error.password_mismatch", "Passwords do not match"),
    ("auth.error.password_too_short", "Password must be at least 8 characters"),
    ("auth.login.title", "Log In"),
    ("auth.login_action", "log in"),
    ("auth.login_button", "Log in"),
    ("auth.oauth_apple", "{{action}} with Apple"),
    ("auth.oauth_google", "{{action}} with Google"),
    ("auth.or_separator", "or"),
    ("auth.password_placeholder", "Password"),
    ("auth.signup.title", "Sign Up"),
    ("auth.signup_action", "sign up"),
    ("auth.signup_button", "Create account"),
    // common
    ("common.billion", "billion"),
    ("common.data_loading", "Fetching data"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} delay"),
    ("common.delay_minutes", "{{minutes}} min"),
    ("common.disclaimer_badge", "This app is not investment advice"),
    ("common.hello", "Hello"),
    ("common.jst", "JST"),
    ("common.million", "million"),
    ("common.minutes_delayed", "minutes delayed"),
    ("common.na", "N/A"),
    ("common.realtime", "Realtime"),
    ("common.trillion", "trillion"),
    // home
    ("home.subtitle", "Welcome to Bridge"),
    ("home.title", "Zeroing the distance between investors and truth"),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "Holdings"),
    ("portfolio.stock_list.avg_price", "Avg Price"),
    ("portfolio.stock_list.change", "Change"),
    ("portfolio.stock_list.current_price", "Current Price"),
    ("portfolio.stock_list.empty", "No holdings yet"),
    ("portfolio.stock_list.gain_loss", "Gain/Loss"),
    ("portfolio.stock_list.market_value", "Market Value"),
    ("portfolio.stock_list.quantity", "Quantity"),
    ("portfolio.summary.total_gain_loss", "Total Gain/Loss"),
    ("portfolio.summary.total_gain_loss_percent", "Total Gain/Loss %"),
    ("portfolio.summary.total_value", "Total Value"),
    ("portfolio.title", "Portfolio"),
    // premium
    ("premium.badge", "PREMIUM"),
    ("premium.feature_locked", "{{feature}} is a premium feature."),
    ("premium.features.advanced_charts", "Advanced Charts"),
    ("premium.features.realtime_data", "Realtime Data"),
    ("premium.upgrade_prompt.button_text", "Upgrade Now"),
    (
        "premium.upgrade_prompt.description",
        "Unlock realtime data and advanced analytics",
    ),
    ("premium.upgrade_prompt.title", "Upgrade to Premium"),
    // search
    ("search.no_results", "No results found"),
    ("search.placeholder", "Search by name or ticker"),
    ("search.title", "Search"),
    // settings
    ("settings.app_version", "App Version"),
    ("settings.language_settings", "Language"),
    ("settings.legal_info", "Legal"),
    ("settings.privacy_policy", "Privacy Policy"),
    ("settings.terms_of_service", "Terms of Service"),
    ("settings.title", "Settings"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "Dividend Yield"),
    ("stock_detail.company_info.industry", "Industry"),
    ("stock_detail.company_info.market_cap", "Market Cap"),
    ("stock_detail.company_info.pe_ratio", "P/E Ratio"),
    ("stock_detail.company_info.sector", "Sector"),
    ("stock_detail.title", "Stock Details"),
];

// ==================== Chinese (zh) ====================

const ZH: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "确认密码"),
    ("auth.email_placeholder", "电子邮箱"),
    ("auth.error.empty_fields", "请填写所有字段"),
    ("auth.error.invalid_email", "请输入有效的电子邮箱"),
    ("auth.error.password_mismatch", "两次输入的密码不一致"),
    ("auth.error.password_too_short", "密码至少需要8个字符"),
    ("auth.login.title", "登录"),
    ("auth.login_action", "登录"),
    ("auth.login_button", "登录"),
    ("auth.oauth_apple", "使用 Apple {{action}}"),
    ("auth.oauth_google", "使用 Google {{action}}"),
    ("auth.or_separator", "或"),
    ("auth.password_placeholder", "密码"),
    ("auth.signup.title", "注册"),
    ("auth.signup_action", "注册"),
    ("auth.signup_button", "创建账户"),
    // common
    ("common.billion", "十亿"),
    ("common.data_loading", "正在获取数据"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} 延迟"),
    ("common.delay_minutes", "{{minutes}} 分钟"),
    ("common.disclaimer_badge", "本应用不构成投资建议"),
    ("common.hello", "你好"),
    ("common.jst", "JST"),
    ("common.million", "百万"),
    ("common.minutes_delayed", "分钟延迟"),
    ("common.na", "暂无"),
    ("common.realtime", "实时"),
    ("common.trillion", "万亿"),
    // home
    ("home.subtitle", "欢迎来到 Bridge"),
    ("home.title", "将投资者与真相之间的距离归零"),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "持仓"),
    ("portfolio.stock_list.avg_price", "平均成本"),
    ("portfolio.stock_list.change", "涨跌"),
    ("portfolio.stock_list.current_price", "现价"),
    ("portfolio.stock_list.empty", "暂无持仓"),
    ("portfolio.stock_list.gain_loss", "盈亏"),
    ("portfolio.stock_list.market_value", "市值"),
    ("portfolio.stock_list.quantity", "数量"),
    ("portfolio.summary.total_gain_loss", "总盈亏"),
    ("portfolio.summary.total_gain_loss_percent", "总盈亏率"),
    ("portfolio.summary.total_value", "总资产"),
    ("portfolio.title", "投资组合"),
    // premium
    ("premium.badge", "高级版"),
    ("premium.feature_locked", "{{feature}}是高级版功能。"),
    ("premium.features.advanced_charts", "高级图表"),
    ("premium.features.realtime_data", "实时数据"),
    ("premium.upgrade_prompt.button_text", "立即升级"),
    ("premium.upgrade_prompt.description", "解锁实时数据和高级分析"),
    ("premium.upgrade_prompt.title", "升级到高级版"),
    // search
    ("search.no_results", "未找到结果"),
    ("search.placeholder", "输入名称或代码"),
    ("search.title", "搜索"),
    // settings
    ("settings.app_version", "应用版本"),
    ("settings.language_settings", "语言设置"),
    ("settings.legal_info", "法律信息"),
    ("settings.privacy_policy", "隐私政策"),
    ("settings.terms_of_service", "服务条款"),
    ("settings.title", "设置"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "股息率"),
    ("stock_detail.company_info.industry", "行业"),
    ("stock_detail.company_info.market_cap", "市值"),
    ("stock_detail.company_info.pe_ratio", "市盈率"),
    ("stock_detail.company_info.sector", "行业板块"),
    ("stock_detail.title", "股票详情"),
];

// ==================== Korean (ko) ====================

const KO: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "비밀번호 확인"),
    ("auth.email_placeholder", "이메일 주소"),
    ("auth.error.empty_fields", "모든 항목을 입력해 주세요"),
    ("auth.error.invalid_email", "올바른 이메일 주소를 입력해 주세요"),
    ("auth.error.password_mismatch", "비밀번호가 일치하지 않습니다"),
    ("auth.error.password_too_short", "비밀번호는 8자 이상이어야 합니다"),
    ("auth.login.title", "로그인"),
    ("auth.login_action", "로그인"),
    ("auth.login_button", "로그인"),
    ("auth.oauth_apple", "Apple로 {{action}}"),
    ("auth.oauth_google", "Google로 {{action}}"),
    ("auth.or_separator", "또는"),
    ("auth.password_placeholder", "비밀번호"),
    ("auth.signup.title", "회원가입"),
    ("auth.signup_action", "가입"),
    ("auth.signup_button", "가입하기"),
    // common
    ("common.billion", "십억"),
    ("common.data_loading", "데이터 가져오는 중"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} 지연"),
    ("common.delay_minutes", "{{minutes}}분"),
    ("common.disclaimer_badge", "본 앱은 투자 조언이 아닙니다"),
    ("common.hello", "안녕하세요"),
    ("common.jst", "JST"),
    ("common.million", "백만"),
    ("common.minutes_delayed", "분 지연"),
    ("common.na", "없음"),
    ("common.realtime", "실시간"),
    ("common.trillion", "조"),
    // home
    ("home.subtitle", "Bridge에 오신 것을 환영합니다"),
    ("home.title", "투자자와 진실 사이의 거리를 0으로 만듭니다"),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "보유 종목"),
    ("portfolio.stock_list.avg_price", "평균 단가"),
    ("portfolio.stock_list.change", "등락"),
    ("portfolio.stock_list.current_price", "현재가"),
    ("portfolio.stock_list.empty", "보유 종목이 없습니다"),
    ("portfolio.stock_list.gain_loss", "손익"),
    ("portfolio.stock_list.market_value", "평가 금액"),
    ("portfolio.stock_list.quantity", "수량"),
    ("portfolio.summary.total_gain_loss", "총 손익"),
    ("portfolio.summary.total_gain_loss_percent", "총 손익률"),
    ("portfolio.summary.total_value", "총 자산"),
    ("portfolio.title", "포트폴리오"),
    // premium
    ("premium.badge", "프리미엄"),
    ("premium.feature_locked", "{{feature}}은(는) 프리미엄 기능입니다."),
    ("premium.features.advanced_charts", "고급 차트"),
    ("premium.features.realtime_data", "실시간 데이터"),
    ("premium.upgrade_prompt.button_text", "지금 업그레이드"),
    (
        "premium.upgrade_prompt.description",
        "실시간 데이터와 고급 분석을 이용하세요",
    ),
    ("premium.upgrade_prompt.title", "프리미엄으로 업그레이드"),
    // search
    ("search.no_results", "검색 결과가 없습니다"),
    ("search.placeholder", "종목명 또는 티커 입력"),
    ("search.title", "검색"),
    // settings
    ("settings.app_version", "앱 버전"),
    ("settings.language_settings", "언어 설정"),
    ("settings.legal_info", "법적 정보"),
    ("settings.privacy_policy", "개인정보 처리방침"),
    ("settings.terms_of_service", "이용약관"),
    ("settings.title", "설정"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "배당 수익률"),
    ("stock_detail.company_info.industry", "업종"),
    ("stock_detail.company_info.market_cap", "시가총액"),
    ("stock_detail.company_info.pe_ratio", "PER"),
    ("stock_detail.company_info.sector", "섹터"),
    ("stock_detail.title", "종목 상세"),
];

// ==================== Spanish (es) ====================

const ES: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "Confirmar contraseña"),
    ("auth.email_placeholder", "Correo electrónico"),
    ("auth.error.empty_fields", "Completa todos los campos"),
    ("auth.error.invalid_email", "Introduce un correo electrónico válido"),
    ("auth.error.password_mismatch", "Las contraseñas no coinciden"),
    (
        "auth.error.password_too_short",
        "La contraseña debe tener al menos 8 caracteres",
    ),
    ("auth.login.title", "Iniciar sesión"),
    ("auth.login_action", "iniciar sesión"),
    ("auth.login_button", "Iniciar sesión"),
    ("auth.oauth_apple", "{{action}} con Apple"),
    ("auth.oauth_google", "{{action}} con Google"),
    ("auth.or_separator", "o"),
    ("auth.password_placeholder", "Contraseña"),
    ("auth.signup.title", "Crear cuenta"),
    ("auth.signup_action", "registrarte"),
    ("auth.signup_button", "Crear cuenta"),
    // common
    ("common.billion", "mil millones"),
    ("common.data_loading", "Obteniendo datos"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} de retraso"),
    ("common.delay_minutes", "{{minutes}} min"),
    (
        "common.disclaimer_badge",
        "Esta aplicación no es asesoramiento de inversión",
    ),
    ("common.hello", "Hola"),
    ("common.jst", "JST"),
    ("common.million", "millones"),
    ("common.minutes_delayed", "minutos de retraso"),
    ("common.na", "N/D"),
    ("common.realtime", "Tiempo real"),
    ("common.trillion", "billones"),
    // home
    ("home.subtitle", "Bienvenido a Bridge"),
    (
        "home.title",
        "Reduciendo a cero la distancia entre inversores y la verdad",
    ),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "Posiciones"),
    ("portfolio.stock_list.avg_price", "Precio medio"),
    ("portfolio.stock_list.change", "Variación"),
    ("portfolio.stock_list.current_price", "Precio actual"),
    ("portfolio.stock_list.empty", "Aún no tienes posiciones"),
    ("portfolio.stock_list.gain_loss", "Ganancia/Pérdida"),
    ("portfolio.stock_list.market_value", "Valor de mercado"),
    ("portfolio.stock_list.quantity", "Cantidad"),
    ("portfolio.summary.total_gain_loss", "Ganancia/Pérdida total"),
    ("portfolio.summary.total_gain_loss_percent", "Ganancia/Pérdida %"),
    ("portfolio.summary.total_value", "Valor total"),
    ("portfolio.title", "Cartera"),
    // premium
    ("premium.badge", "PREMIUM"),
    ("premium.feature_locked", "{{feature}} es una función premium."),
    ("premium.features.advanced_charts", "Gráficos avanzados"),
    ("premium.features.realtime_data", "Datos en tiempo real"),
    ("premium.upgrade_prompt.button_text", "Mejorar ahora"),
    (
        "premium.upgrade_prompt.description",
        "Desbloquea datos en tiempo real y análisis avanzados",
    ),
    ("premium.upgrade_prompt.title", "Mejora a Premium"),
    // search
    ("search.no_results", "No se encontraron resultados"),
    ("search.placeholder", "Busca por nombre o símbolo"),
    ("search.title", "Buscar"),
    // settings
    ("settings.app_version", "Versión de la app"),
    ("settings.language_settings", "Idioma"),
    ("settings.legal_info", "Información legal"),
    ("settings.privacy_policy", "Política de privacidad"),
    ("settings.terms_of_service", "Términos del servicio"),
    ("settings.title", "Ajustes"),
    // stock detail
    (
        "stock_detail.company_info.dividend_yield",
        "Rentabilidad por dividendo",
    ),
    ("stock_detail.company_info.industry", "Industria"),
    ("stock_detail.company_info.market_cap", "Capitalización"),
    ("stock_detail.company_info.pe_ratio", "PER"),
    ("stock_detail.company_info.sector", "Sector"),
    ("stock_detail.title", "Detalle del valor"),
];

// ==================== French (fr) ====================

const FR: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "Confirmer le mot de passe"),
    ("auth.email_placeholder", "Adresse e-mail"),
    ("auth.error.empty_fields", "Veuillez remplir tous les champs"),
    ("auth.error.invalid_email", "Veuillez saisir une adresse e-mail valide"),
    ("auth.error.password_mismatch", "Les mots de passe ne correspondent pas"),
    (
        "auth.error.password_too_short",
        "Le mot de passe doit contenir au moins 8 caractères",
    ),
    ("auth.login.title", "Connexion"),
    ("auth.login_action", "se connecter"),
    ("auth.login_button", "Se connecter"),
    ("auth.oauth_apple", "{{action}} avec Apple"),
    ("auth.oauth_google", "{{action}} avec Google"),
    ("auth.or_separator", "ou"),
    ("auth.password_placeholder", "Mot de passe"),
    ("auth.signup.title", "Inscription"),
    ("auth.signup_action", "s'inscrire"),
    ("auth.signup_button", "Créer un compte"),
    // common
    ("common.billion", "milliards"),
    ("common.data_loading", "Récupération des données"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} de retard"),
    ("common.delay_minutes", "{{minutes}} min"),
    (
        "common.disclaimer_badge",
        "Cette application n'est pas un conseil en investissement",
    ),
    ("common.hello", "Bonjour"),
    ("common.jst", "JST"),
    ("common.million", "millions"),
    ("common.minutes_delayed", "minutes de retard"),
    ("common.na", "N/D"),
    ("common.realtime", "Temps réel"),
    ("common.trillion", "billions"),
    // home
    ("home.subtitle", "Bienvenue sur Bridge"),
    (
        "home.title",
        "Réduire à zéro la distance entre les investisseurs et la vérité",
    ),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "Positions"),
    ("portfolio.stock_list.avg_price", "Prix moyen"),
    ("portfolio.stock_list.change", "Variation"),
    ("portfolio.stock_list.current_price", "Cours actuel"),
    ("portfolio.stock_list.empty", "Aucune position pour le moment"),
    ("portfolio.stock_list.gain_loss", "Gain/Perte"),
    ("portfolio.stock_list.market_value", "Valeur de marché"),
    ("portfolio.stock_list.quantity", "Quantité"),
    ("portfolio.summary.total_gain_loss", "Gain/Perte total"),
    ("portfolio.summary.total_gain_loss_percent", "Gain/Perte %"),
    ("portfolio.summary.total_value", "Valeur totale"),
    ("portfolio.title", "Portefeuille"),
    // premium
    ("premium.badge", "PREMIUM"),
    ("premium.feature_locked", "{{feature}} est une fonctionnalité premium."),
    ("premium.features.advanced_charts", "Graphiques avancés"),
    ("premium.features.realtime_data", "Données en temps réel"),
    ("premium.upgrade_prompt.button_text", "Mettre à niveau"),
    (
        "premium.upgrade_prompt.description",
        "Débloquez les données en temps réel et les analyses avancées",
    ),
    ("premium.upgrade_prompt.title", "Passez à Premium"),
    // search
    ("search.no_results", "Aucun résultat trouvé"),
    ("search.placeholder", "Rechercher par nom ou symbole"),
    ("search.title", "Recherche"),
    // settings
    ("settings.app_version", "Version de l'application"),
    ("settings.language_settings", "Langue"),
    ("settings.legal_info", "Informations légales"),
    ("settings.privacy_policy", "Politique de confidentialité"),
    ("settings.terms_of_service", "Conditions d'utilisation"),
    ("settings.title", "Paramètres"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "Rendement du dividende"),
    ("stock_detail.company_info.industry", "Industrie"),
    ("stock_detail.company_info.market_cap", "Capitalisation"),
    ("stock_detail.company_info.pe_ratio", "PER"),
    ("stock_detail.company_info.sector", "Secteur"),
    ("stock_detail.title", "Détail du titre"),
];

// ==================== German (de) ====================

const DE: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "Passwort bestätigen"),
    ("auth.email_placeholder", "E-Mail-Adresse"),
    ("auth.error.empty_fields", "Bitte alle Felder ausfüllen"),
    ("auth.error.invalid_email", "Bitte eine gültige E-Mail-Adresse eingeben"),
    ("auth.error.password_mismatch", "Die Passwörter stimmen nicht überein"),
    (
        "auth.error.password_too_short",
        "Das Passwort muss mindestens 8 Zeichen lang sein",
    ),
    ("auth.login.title", "Anmelden"),
    ("auth.login_action", "anmelden"),
    ("auth.login_button", "Anmelden"),
    ("auth.oauth_apple", "Mit Apple {{action}}"),
    ("auth.oauth_google", "Mit Google {{action}}"),
    ("auth.or_separator", "oder"),
    ("auth.password_placeholder", "Passwort"),
    ("auth.signup.title", "Registrieren"),
    ("auth.signup_action", "registrieren"),
    ("auth.signup_button", "Konto erstellen"),
    // common
    ("common.billion", "Milliarden"),
    ("common.data_loading", "Daten werden abgerufen"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} Verzögerung"),
    ("common.delay_minutes", "{{minutes}} Min."),
    ("common.disclaimer_badge", "Diese App ist keine Anlageberatung"),
    ("common.hello", "Hallo"),
    ("common.jst", "JST"),
    ("common.million", "Millionen"),
    ("common.minutes_delayed", "Minuten verzögert"),
    ("common.na", "k.A."),
    ("common.realtime", "Echtzeit"),
    ("common.trillion", "Billionen"),
    // home
    ("home.subtitle", "Willkommen bei Bridge"),
    (
        "home.title",
        "Den Abstand zwischen Investoren und Wahrheit auf Null reduzieren",
    ),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "Positionen"),
    ("portfolio.stock_list.avg_price", "Durchschnittspreis"),
    ("portfolio.stock_list.change", "Veränderung"),
    ("portfolio.stock_list.current_price", "Aktueller Kurs"),
    ("portfolio.stock_list.empty", "Noch keine Positionen"),
    ("portfolio.stock_list.gain_loss", "Gewinn/Verlust"),
    ("portfolio.stock_list.market_value", "Marktwert"),
    ("portfolio.stock_list.quantity", "Stückzahl"),
    ("portfolio.summary.total_gain_loss", "Gesamtgewinn/-verlust"),
    ("portfolio.summary.total_gain_loss_percent", "Gewinn/Verlust %"),
    ("portfolio.summary.total_value", "Gesamtwert"),
    ("portfolio.title", "Portfolio"),
    // premium
    ("premium.badge", "PREMIUM"),
    ("premium.feature_locked", "{{feature}} ist eine Premium-Funktion."),
    ("premium.features.advanced_charts", "Erweiterte Charts"),
    ("premium.features.realtime_data", "Echtzeitdaten"),
    ("premium.upgrade_prompt.button_text", "Jetzt upgraden"),
    (
        "premium.upgrade_prompt.description",
        "Schalten Sie Echtzeitdaten und erweiterte Analysen frei",
    ),
    ("premium.upgrade_prompt.title", "Auf Premium upgraden"),
    // search
    ("search.no_results", "Keine Ergebnisse gefunden"),
    ("search.placeholder", "Nach Name oder Ticker suchen"),
    ("search.title", "Suche"),
    // settings
    ("settings.app_version", "App-Version"),
    ("settings.language_settings", "Sprache"),
    ("settings.legal_info", "Rechtliches"),
    ("settings.privacy_policy", "Datenschutzerklärung"),
    ("settings.terms_of_service", "Nutzungsbedingungen"),
    ("settings.title", "Einstellungen"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "Dividendenrendite"),
    ("stock_detail.company_info.industry", "Branche"),
    ("stock_detail.company_info.market_cap", "Marktkapitalisierung"),
    ("stock_detail.company_info.pe_ratio", "KGV"),
    ("stock_detail.company_info.sector", "Sektor"),
    ("stock_detail.title", "Aktiendetails"),
];

// ==================== Portuguese (pt) ====================

const PT: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "Confirmar senha"),
    ("auth.email_placeholder", "E-mail"),
    ("auth.error.empty_fields", "Preencha todos os campos"),
    ("auth.error.invalid_email", "Insira um e-mail válido"),
    ("auth.error.password_mismatch", "As senhas não coincidem"),
    ("auth.error.password_too_short", "A senha deve ter pelo menos 8 caracteres"),
    ("auth.login.title", "Entrar"),
    ("auth.login_action", "entrar"),
    ("auth.login_button", "Entrar"),
    ("auth.oauth_apple", "{{action}} com a Apple"),
    ("auth.oauth_google", "{{action}} com o Google"),
    ("auth.or_separator", "ou"),
    ("auth.password_placeholder", "Senha"),
    ("auth.signup.title", "Criar conta"),
    ("auth.signup_action", "cadastrar"),
    ("auth.signup_button", "Criar conta"),
    // common
    ("common.billion", "bilhões"),
    ("common.data_loading", "Obtendo dados"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} de atraso"),
    ("common.delay_minutes", "{{minutes}} min"),
    (
        "common.disclaimer_badge",
        "Este aplicativo não é um conselho de investimento",
    ),
    ("common.hello", "Olá"),
    ("common.jst", "JST"),
    ("common.million", "milhões"),
    ("common.minutes_delayed", "minutos de atraso"),
    ("common.na", "N/D"),
    ("common.realtime", "Tempo real"),
    ("common.trillion", "trilhões"),
    // home
    ("home.subtitle", "Bem-vindo ao Bridge"),
    (
        "home.title",
        "Reduzindo a distância entre investidores e a verdade a zero",
    ),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "Posições"),
    ("portfolio.stock_list.avg_price", "Preço médio"),
    ("portfolio.stock_list.change", "Variação"),
    ("portfolio.stock_list.current_price", "Preço atual"),
    ("portfolio.stock_list.empty", "Nenhuma posição ainda"),
    ("portfolio.stock_list.gain_loss", "Ganho/Perda"),
    ("portfolio.stock_list.market_value", "Valor de mercado"),
    ("portfolio.stock_list.quantity", "Quantidade"),
    ("portfolio.summary.total_gain_loss", "Ganho/Perda total"),
    ("portfolio.summary.total_gain_loss_percent", "Ganho/Perda %"),
    ("portfolio.summary.total_value", "Valor total"),
    ("portfolio.title", "Carteira"),
    // premium
    ("premium.badge", "PREMIUM"),
    ("premium.feature_locked", "{{feature}} é um recurso premium."),
    ("premium.features.advanced_charts", "Gráficos avançados"),
    ("premium.features.realtime_data", "Dados em tempo real"),
    ("premium.upgrade_prompt.button_text", "Fazer upgrade agora"),
    (
        "premium.upgrade_prompt.description",
        "Desbloqueie dados em tempo real e análises avançadas",
    ),
    ("premium.upgrade_prompt.title", "Faça upgrade para o Premium"),
    // search
    ("search.no_results", "Nenhum resultado encontrado"),
    ("search.placeholder", "Busque por nome ou código"),
    ("search.title", "Buscar"),
    // settings
    ("settings.app_version", "Versão do app"),
    ("settings.language_settings", "Idioma"),
    ("settings.legal_info", "Informações legais"),
    ("settings.privacy_policy", "Política de privacidade"),
    ("settings.terms_of_service", "Termos de serviço"),
    ("settings.title", "Configurações"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "Dividend yield"),
    ("stock_detail.company_info.industry", "Indústria"),
    ("stock_detail.company_info.market_cap", "Capitalização"),
    ("stock_detail.company_info.pe_ratio", "P/L"),
    ("stock_detail.company_info.sector", "Setor"),
    ("stock_detail.title", "Detalhes da ação"),
];

// ==================== Arabic (ar) ====================

const AR: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "تأكيد كلمة المرور"),
    ("auth.email_placeholder", "البريد الإلكتروني"),
    ("auth.error.empty_fields", "يرجى ملء جميع الحقول"),
    ("auth.error.invalid_email", "يرجى إدخال بريد إلكتروني صالح"),
    ("auth.error.password_mismatch", "كلمتا المرور غير متطابقتين"),
    ("auth.error.password_too_short", "يجب ألا تقل كلمة المرور عن 8 أحرف"),
    ("auth.login.title", "تسجيل الدخول"),
    ("auth.login_action", "تسجيل الدخول"),
    ("auth.login_button", "دخول"),
    ("auth.oauth_apple", "{{action}} عبر Apple"),
    ("auth.oauth_google", "{{action}} عبر Google"),
    ("auth.or_separator", "أو"),
    ("auth.password_placeholder", "كلمة المرور"),
    ("auth.signup.title", "إنشاء حساب"),
    ("auth.signup_action", "التسجيل"),
    ("auth.signup_button", "إنشاء حساب"),
    // common
    ("common.billion", "مليار"),
    ("common.data_loading", "جلب البيانات"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} تأخير"),
    ("common.delay_minutes", "{{minutes}} دقيقة"),
    ("common.disclaimer_badge", "هذا التطبيق ليس نصيحة استثمارية"),
    ("common.hello", "مرحبا"),
    ("common.jst", "JST"),
    ("common.million", "مليون"),
    ("common.minutes_delayed", "دقائق تأخير"),
    ("common.na", "غير متاح"),
    ("common.realtime", "فوري"),
    ("common.trillion", "تريليون"),
    // home
    ("home.subtitle", "مرحبًا بك في Bridge"),
    ("home.title", "تصفير المسافة بين المستثمرين والحقيقة"),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "الحيازات"),
    ("portfolio.stock_list.avg_price", "متوسط السعر"),
    ("portfolio.stock_list.change", "التغير"),
    ("portfolio.stock_list.current_price", "السعر الحالي"),
    ("portfolio.stock_list.empty", "لا توجد حيازات بعد"),
    ("portfolio.stock_list.gain_loss", "الربح/الخسارة"),
    ("portfolio.stock_list.market_value", "القيمة السوقية"),
    ("portfolio.stock_list.quantity", "الكمية"),
    ("portfolio.summary.total_gain_loss", "إجمالي الربح/الخسارة"),
    ("portfolio.summary.total_gain_loss_percent", "نسبة الربح/الخسارة"),
    ("portfolio.summary.total_value", "القيمة الإجمالية"),
    ("portfolio.title", "المحفظة"),
    // premium
    ("premium.badge", "بريميوم"),
    ("premium.feature_locked", "{{feature}} ميزة مدفوعة."),
    ("premium.features.advanced_charts", "الرسوم البيانية المتقدمة"),
    ("premium.features.realtime_data", "البيانات الفورية"),
    ("premium.upgrade_prompt.button_text", "الترقية الآن"),
    (
        "premium.upgrade_prompt.description",
        "افتح البيانات الفورية والتحليلات المتقدمة",
    ),
    ("premium.upgrade_prompt.title", "الترقية إلى بريميوم"),
    // search
    ("search.no_results", "لا توجد نتائج"),
    ("search.placeholder", "ابحث بالاسم أو الرمز"),
    ("search.title", "بحث"),
    // settings
    ("settings.app_version", "إصدار التطبيق"),
    ("settings.language_settings", "اللغة"),
    ("settings.legal_info", "معلومات قانونية"),
    ("settings.privacy_policy", "سياسة الخصوصية"),
    ("settings.terms_of_service", "شروط الخدمة"),
    ("settings.title", "الإعدادات"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "عائد التوزيعات"),
    ("stock_detail.company_info.industry", "الصناعة"),
    ("stock_detail.company_info.market_cap", "القيمة السوقية"),
    ("stock_detail.company_info.pe_ratio", "مكرر الربحية"),
    ("stock_detail.company_info.sector", "القطاع"),
    ("stock_detail.title", "تفاصيل السهم"),
];

// ==================== Hindi (hi) ====================

const HI: Entries = &[
    // auth
    ("auth.confirm_password_placeholder", "पासवर्ड की पुष्टि करें"),
    ("auth.email_placeholder", "ईमेल पता"),
    ("auth.error.empty_fields", "कृपया सभी फ़ील्ड भरें"),
    ("auth.error.invalid_email", "कृपया मान्य ईमेल पता दर्ज करें"),
    ("auth.error.password_mismatch", "पासवर्ड मेल नहीं खाते"),
    (
        "auth.error.password_too_short",
        "पासवर्ड कम से कम 8 अक्षरों का होना चाहिए",
    ),
    ("auth.login.title", "लॉग इन"),
    ("auth.login_action", "लॉग इन"),
    ("auth.login_button", "लॉग इन करें"),
    ("auth.oauth_apple", "Apple से {{action}}"),
    ("auth.oauth_google", "Google से {{action}}"),
    ("auth.or_separator", "या"),
    ("auth.password_placeholder", "पासवर्ड"),
    ("auth.signup.title", "साइन अप"),
    ("auth.signup_action", "साइन अप"),
    ("auth.signup_button", "खाता बनाएं"),
    // common
    ("common.billion", "अरब"),
    ("common.data_loading", "डेटा प्राप्त कर रहा है"),
    ("common.data_source", "{{source}} | {{time}} JST | {{delay}} देरी"),
    ("common.delay_minutes", "{{minutes}} मिनट"),
    ("common.disclaimer_badge", "यह ऐप निवेश सलाह नहीं है"),
    ("common.hello", "नमस्ते"),
    ("common.jst", "JST"),
    ("common.million", "दस लाख"),
    ("common.minutes_delayed", "मिनट विलंबित"),
    ("common.na", "उपलब्ध नहीं"),
    ("common.realtime", "रीयल-टाइम"),
    ("common.trillion", "ट्रिलियन"),
    // home
    ("home.subtitle", "ब्रिज में आपका स्वागत है"),
    (
        "home.title",
        "निवेशकों और सच्चाई के बीच की दूरी को शून्य करना",
    ),
    // language names
    ("language.ja", "日本語"),
    ("language.en", "English"),
    ("language.zh", "中文"),
    ("language.ko", "한국어"),
    ("language.es", "Español"),
    ("language.fr", "Français"),
    ("language.de", "Deutsch"),
    ("language.pt", "Português"),
    ("language.ar", "العربية"),
    ("language.hi", "हिन्दी"),
    // portfolio
    ("portfolio.holdings", "होल्डिंग्स"),
    ("portfolio.stock_list.avg_price", "औसत मूल्य"),
    ("portfolio.stock_list.change", "परिवर्तन"),
    ("portfolio.stock_list.current_price", "वर्तमान मूल्य"),
    ("portfolio.stock_list.empty", "अभी कोई होल्डिंग नहीं"),
    ("portfolio.stock_list.gain_loss", "लाभ/हानि"),
    ("portfolio.stock_list.market_value", "बाज़ार मूल्य"),
    ("portfolio.stock_list.quantity", "मात्रा"),
    ("portfolio.summary.total_gain_loss", "कुल लाभ/हानि"),
    ("portfolio.summary.total_gain_loss_percent", "लाभ/हानि %"),
    ("portfolio.summary.total_value", "कुल मूल्य"),
    ("portfolio.title", "पोर्टफोलियो"),
    // premium
    ("premium.badge", "प्रीमियम"),
    ("premium.feature_locked", "{{feature}} एक प्रीमियम सुविधा है।"),
    ("premium.features.advanced_charts", "उन्नत चार्ट"),
    ("premium.features.realtime_data", "रीयल-टाइम डेटा"),
    ("premium.upgrade_prompt.button_text", "अभी अपग्रेड करें"),
    (
        "premium.upgrade_prompt.description",
        "रीयल-टाइम डेटा और उन्नत विश्लेषण अनलॉक करें",
    ),
    ("premium.upgrade_prompt.title", "प्रीमियम में अपग्रेड करें"),
    // search
    ("search.no_results", "कोई परिणाम नहीं मिला"),
    ("search.placeholder", "नाम या टिकर से खोजें"),
    ("search.title", "खोज"),
    // settings
    ("settings.app_version", "ऐप संस्करण"),
    ("settings.language_settings", "भाषा"),
    ("settings.legal_info", "कानूनी जानकारी"),
    ("settings.privacy_policy", "गोपनीयता नीति"),
    ("settings.terms_of_service", "सेवा की शर्तें"),
    ("settings.title", "सेटिंग्स"),
    // stock detail
    ("stock_detail.company_info.dividend_yield", "लाभांश प्रतिफल"),
    ("stock_detail.company_info.industry", "उद्योग"),
    ("stock_detail.company_info.market_cap", "मार्केट कैप"),
    ("stock_detail.company_info.pe_ratio", "पी/ई अनुपात"),
    ("stock_detail.company_info.sector", "सेक्टर"),
    ("stock_detail.title", "स्टॉक विवरण"),
];

/// The shipped tables, one per supported language.
pub fn all_tables() -> &'static [(Language, Entries)] {
    &[
        (Language::Ja, JA),
        (Language::En, EN),
        (Language::Zh, ZH),
        (Language::Ko, KO),
        (Language::Es, ES),
        (Language::Fr, FR),
        (Language::De, DE),
        (Language::Pt, PT),
        (Language::Ar, AR),
        (Language::Hi, HI),
    ]
}

/// Returns the raw entry table for a language.
pub fn entries(language: Language) -> Entries {
    match language {
        Language::Ja => JA,
        Language::En => EN,
        Language::Zh => ZH,
        Language::Ko => KO,
        Language::Es => ES,
        Language::Fr => FR,
        Language::De => DE,
        Language::Pt => PT,
        Language::Ar => AR,
        Language::Hi => HI,
    }
}

/// Typed two-level translation lookup: language first, key second.
///
/// Values are `'static` templates, so lookups hand out references without
/// cloning. The shipped catalog is built once behind [`catalog`]; tests and
/// fixtures can build their own with [`Catalog::from_entries`].
#[derive(Debug)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl Catalog {
    /// Builds a catalog from explicit per-language tables.
    ///
    /// Later duplicates of a key within one table win, matching plain map
    /// insertion order semantics; the shipped tables carry no duplicates
    /// (the validator checks).
    pub fn from_entries(tables: &[(Language, Entries)]) -> Self {
        let tables = tables
            .iter()
            .map(|(language, entries)| (*language, entries.iter().copied().collect()))
            .collect();
        Catalog { tables }
    }

    /// Exact lookup in one language's table. No fallback.
    pub fn get(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables.get(&language)?.get(key).copied()
    }

    /// Resolves a key through the fallback chain: the requested language,
    /// then the default language, then the key itself verbatim.
    ///
    /// Total by construction; a key missing everywhere renders as itself so
    /// the UI shows something greppable instead of a blank.
    pub fn resolve<'a>(&self, language: Language, key: &'a str) -> &'a str {
        if let Some(template) = self.get(language, key) {
            return template;
        }
        if language != DEFAULT_LANGUAGE {
            if let Some(template) = self.get(DEFAULT_LANGUAGE, key) {
                return template;
            }
        }
        key
    }

    /// Number of keys in a language's table (0 for an absent language).
    pub fn key_count(&self, language: Language) -> usize {
        self.tables.get(&language).map_or(0, |table| table.len())
    }

    /// True if the catalog carries a table for the language.
    pub fn has_language(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Returns the shipped catalog, built on first use.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| Catalog::from_entries(all_tables()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Table Shape Tests ====================

    #[test]
    fn test_all_tables_cover_every_language() {
        assert_eq!(all_tables().len(), Language::ALL.len());
        for lang in Language::ALL {
            assert!(all_tables().iter().any(|(l, _)| *l == lang));
        }
    }

    #[test]
    fn test_every_language_has_the_reference_key_count() {
        let reference = JA.len();
        for (lang, entries) in all_tables() {
            assert_eq!(
                entries.len(),
                reference,
                "{} table should carry {} keys",
                lang.code(),
                reference
            );
        }
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for (lang, entries) in all_tables() {
            let mut seen = std::collections::HashSet::new();
            for (key, _) in entries.iter() {
                assert!(seen.insert(key), "{} has duplicate key {key}", lang.code());
            }
        }
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_exact_hit() {
        assert_eq!(
            catalog().get(Language::En, "portfolio.title"),
            Some("Portfolio")
        );
        assert_eq!(
            catalog().get(Language::Ja, "portfolio.title"),
            Some("ポートフォリオ")
        );
    }

    #[test]
    fn test_get_missing_key_is_none() {
        assert_eq!(catalog().get(Language::En, "no.such.key"), None);
    }

    #[test]
    fn test_resolve_prefers_requested_language() {
        assert_eq!(catalog().resolve(Language::Ko, "common.hello"), "안녕하세요");
    }

    #[test]
    fn test_resolve_falls_back_to_default_language() {
        let fixture = Catalog::from_entries(&[
            (Language::Ja, &[("greeting", "こんにちは"), ("only_ja", "日本限定")][..]),
            (Language::En, &[("greeting", "Hello")][..]),
        ]);
        assert_eq!(fixture.resolve(Language::En, "only_ja"), "日本限定");
    }

    #[test]
    fn test_resolve_missing_everywhere_returns_key() {
        assert_eq!(
            catalog().resolve(Language::En, "totally.unknown.key"),
            "totally.unknown.key"
        );
        assert_eq!(
            catalog().resolve(Language::Ja, "totally.unknown.key"),
            "totally.unknown.key"
        );
    }

    // ==================== Known Literal Tests ====================

    #[test]
    fn test_hello_literals() {
        assert_eq!(catalog().get(Language::Ja, "common.hello"), Some("こんにちは"));
        assert_eq!(catalog().get(Language::En, "common.hello"), Some("Hello"));
        assert_eq!(catalog().get(Language::Ar, "common.hello"), Some("مرحبا"));
    }

    #[test]
    fn test_home_title_literals() {
        assert_eq!(
            catalog().get(Language::Ja, "home.title"),
            Some("投資家と真実の間にある距離をゼロにする")
        );
        assert_eq!(
            catalog().get(Language::En, "home.title"),
            Some("Zeroing the distance between investors and truth")
        );
    }

    #[test]
    fn test_feature_locked_english_template() {
        assert_eq!(
            catalog().get(Language::En, "premium.feature_locked"),
            Some("{{feature}} is a premium feature.")
        );
    }

    #[test]
    fn test_data_source_templates_keep_placeholders() {
        for lang in Language::ALL {
            let template = catalog().get(lang, "common.data_source").unwrap();
            assert!(template.contains("{{source}}"), "{}", lang.code());
            assert!(template.contains("{{time}}"), "{}", lang.code());
            assert!(template.contains("{{delay}}"), "{}", lang.code());
        }
    }

    #[test]
    fn test_oauth_templates_keep_action_placeholder() {
        for lang in Language::ALL {
            for key in ["auth.oauth_google", "auth.oauth_apple"] {
                let template = catalog().get(lang, key).unwrap();
                assert!(template.contains("{{action}}"), "{} {key}", lang.code());
            }
        }
    }

    #[test]
    fn test_native_language_names_identical_across_tables() {
        for lang in Language::ALL {
            let key = format!("language.{}", lang.code());
            for table_lang in Language::ALL {
                assert_eq!(
                    catalog().get(table_lang, &key),
                    Some(lang.native_name()),
                    "{} in {} table",
                    key,
                    table_lang.code()
                );
            }
        }
    }

    #[test]
    fn test_key_count_reports_table_size() {
        assert_eq!(catalog().key_count(Language::Ja), JA.len());
        assert!(catalog().has_language(Language::Hi));
    }
}

use std::sync::LazyLock;

pub const ICON_REPORT: &str = "📊";
pub const ICON_PREDICTION: &str = "🔮";
pub const ICON_ADVICE: &str = "🔍";
pub const ICON_UP: &str = "🔼";
pub const ICON_DOWN: &str = "🔽";
pub const ICON_STOCK: &str = "📈";
pub const ICON_FACTORY: &str = "🏭";
pub const ICON_CART: &str = "🛒";
pub const ICON_BULLET: &str = "•";

pub struct UiText {
    // --- Main window ---
    pub window_title: String,
    pub app_heading: String,
    pub app_description: String,
    pub app_features: String,
    pub btn_load: String,
    pub btn_chart: String,
    pub btn_sim_price: String,
    pub btn_sim_profit: String,
    pub label_source: String,
    pub label_empty_report: String,

    // --- Message dialog titles ---
    pub title_info: String,
    pub title_error: String,
    pub title_sim_result: String,

    // --- Chart chooser / chart window ---
    pub chooser_title: String,
    pub chart_title_prefix: String,
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub legend_history: String,
    pub legend_projection: String,

    // --- Simulation forms ---
    pub sim_price_title: String,
    pub sim_profit_title: String,
    pub sim_new_price: String,
    pub sim_unit_cost: String,
    pub sim_baseline: String,
    pub btn_calculate: String,
    pub btn_cancel: String,

    // --- Report blocks ---
    pub report_calc_heading: String,
    pub report_pred_heading: String,
    pub report_rec_heading: String,
    pub unit_label: String,
    pub money_label: String,
    pub trend_rising: String,
    pub trend_falling: String,
    pub calc_avg_demand: String,
    pub calc_max_demand: String,
    pub calc_min_demand: String,
    pub calc_in_month: String,
    pub calc_total_next_year: String,
    pub calc_next_month_revenue: String,
    pub pred_trend_prefix: String,
    pub pred_trend_by: String,
    pub pred_trend_suffix: String,
    pub pred_largest_increase: String,
    pub pred_largest_decrease: String,
    pub pred_month_prefix: String,
    pub pred_highest_month: String,
    pub pred_lowest_month: String,

    // --- Recommendations ---
    pub rec_price_cut_prefix: String,
    pub rec_price_cut_suffix: String,
    pub rec_promotion: String,
    pub rec_stock: String,
    pub rec_production_prefix: String,
    pub rec_distribution: String,

    // --- Simulation results ---
    pub sim_result_demand: String,
    pub sim_result_profit: String,

    // --- Report table (headless) ---
    pub table_history: String,
    pub table_projection: String,

    // --- Errors / info ---
    pub info_no_file: String,
    pub error_no_data: String,
    pub error_load_prefix: String,
    pub error_invalid_price: String,
    pub error_invalid_price_or_cost: String,
    pub error_zero_baseline_price: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    window_title: "Sistem de prognoză cerere".to_string(),
    app_heading: "Sistem de Prognoză a Cererii".to_string(),
    app_description: "Această aplicație vă permite să încărcați date istorice despre cererea produselor și să generați prognoze detaliate.".to_string(),
    app_features: "Funcții disponibile: încărcare fișier Excel, generare prognoză, vizualizare grafic interactiv.".to_string(),
    btn_load: "Încarcă fișier și calculează".to_string(),
    btn_chart: "Grafic Interactiv".to_string(),
    btn_sim_price: "Simulare Impact Preț".to_string(),
    btn_sim_profit: "Simulare Impact Profit".to_string(),
    label_source: "Fișier".to_string(),
    label_empty_report: "Încărcați un fișier Excel pentru a vedea prognoza.".to_string(),

    title_info: "Informație".to_string(),
    title_error: "Eroare".to_string(),
    title_sim_result: "Rezultat Simulare".to_string(),

    chooser_title: "Selectați graficul".to_string(),
    chart_title_prefix: "Grafic:".to_string(),
    plot_x_axis: "Data".to_string(),
    plot_y_axis: "Valoare".to_string(),
    legend_history: "Istoric".to_string(),
    legend_projection: "Prognoză".to_string(),

    sim_price_title: "Simulare Impact Preț".to_string(),
    sim_profit_title: "Simulare Impact Profit".to_string(),
    sim_new_price: "Introduceți un preț nou:".to_string(),
    sim_unit_cost: "Introduceți costul pe unitate:".to_string(),
    sim_baseline: "Ultima lună".to_string(),
    btn_calculate: "Calculează".to_string(),
    btn_cancel: "Renunță".to_string(),

    report_calc_heading: format!("{} ** Calcule Detaliate **", ICON_REPORT),
    report_pred_heading: format!("{} ** Predicții și Observații **", ICON_PREDICTION),
    report_rec_heading: format!("{} ** Recomandări **", ICON_ADVICE),
    unit_label: "unități".to_string(),
    money_label: "unități monetare".to_string(),
    trend_rising: format!("{} în creștere", ICON_UP),
    trend_falling: format!("{} în scădere", ICON_DOWN),
    calc_avg_demand: "Media cererii istorice:".to_string(),
    calc_max_demand: "Prognoza cererii maxime:".to_string(),
    calc_min_demand: "Prognoza cererii minime:".to_string(),
    calc_in_month: "în luna".to_string(),
    calc_total_next_year: "Total cerere prognozată pentru anul următor:".to_string(),
    calc_next_month_revenue: "Venituri estimate pentru luna următoare:".to_string(),
    pred_trend_prefix: "Cererea este".to_string(),
    pred_trend_by: "cu".to_string(),
    pred_trend_suffix: "față de luna anterioară".to_string(),
    pred_largest_increase: "Cea mai mare creștere lunară prognozată este de".to_string(),
    pred_largest_decrease: "Cea mai mare scădere lunară prognozată este de".to_string(),
    pred_month_prefix: "Luna".to_string(),
    pred_highest_month: "este prognozată să aibă cea mai mare cerere".to_string(),
    pred_lowest_month: "este prognozată să aibă cea mai mică cerere".to_string(),

    rec_price_cut_prefix: format!("{} Se recomandă o reducere a prețului produsului cu", ICON_DOWN),
    rec_price_cut_suffix: "pentru a stimula cererea în luna următoare.".to_string(),
    rec_promotion: format!(
        "{} Creșterea cererii sugerează lansarea unei campanii promoționale pentru a maximiza veniturile.",
        ICON_UP
    ),
    rec_stock: format!(
        "{} Creșterea prognozată a cererii sugerează optimizarea stocurilor pentru următoarele luni.",
        ICON_STOCK
    ),
    rec_production_prefix: format!(
        "{} Se recomandă ajustarea planificării producției pentru a răspunde cererii din luna",
        ICON_FACTORY
    ),
    rec_distribution: format!(
        "{} Luați în considerare extinderea canalelor de distribuție pentru a evita pierderile din cauza lipsei de stoc.",
        ICON_CART
    ),

    sim_result_demand: "Cererea estimată:".to_string(),
    sim_result_profit: "Profitul estimat:".to_string(),

    table_history: "istoric".to_string(),
    table_projection: "prognoză".to_string(),

    info_no_file: "Niciun fișier selectat!".to_string(),
    error_no_data: "Nu există date disponibile. Încărcați un fișier mai întâi!".to_string(),
    error_load_prefix: "Eroare la citirea datelor sau generarea prognozei:".to_string(),
    error_invalid_price: "Introduceți un preț valid!".to_string(),
    error_invalid_price_or_cost: "Introduceți valori valide pentru preț și cost!".to_string(),
    error_zero_baseline_price: "Prețul curent din date este zero; impactul prețului nu poate fi calculat.".to_string(),
});

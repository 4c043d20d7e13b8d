use crate::models::MenuItem;

/// (id, category, name, old price, new price)
const MENU: &[(u32, &str, &str, f64, f64)] = &[
    (1, "Закуски", "Пхали ассорти", 590.0, 650.0),
    (2, "Закуски", "Баклажаны с орехами", 450.0, 520.0),
    (3, "Закуски", "Сулугуни жареный", 420.0, 470.0),
    (4, "Закуски", "Аджапсандали", 480.0, 530.0),
    (5, "Салаты", "Грузинский салат с орехами", 520.0, 590.0),
    (6, "Салаты", "Салат Тбилисо", 560.0, 620.0),
    (7, "Салаты", "Салат из печёной свёклы", 390.0, 430.0),
    (8, "Супы", "Харчо", 390.0, 450.0),
    (9, "Супы", "Чихиртма", 360.0, 400.0),
    (10, "Супы", "Борщ", 340.0, 380.0),
    (11, "Хачапури", "Хачапури по-аджарски", 550.0, 620.0),
    (12, "Хачапури", "Хачапури по-имеретински", 490.0, 540.0),
    (13, "Хачапури", "Хачапури по-мегрельски", 590.0, 650.0),
    (14, "Хачапури", "Пеновани", 450.0, 490.0),
    (15, "Хинкали", "Хинкали с говядиной и свининой", 95.0, 110.0),
    (16, "Хинкали", "Хинкали с бараниной", 105.0, 120.0),
    (17, "Хинкали", "Хинкали с сыром", 90.0, 100.0),
    (18, "Горячее", "Чкмерули", 890.0, 990.0),
    (19, "Горячее", "Чахохбили", 690.0, 760.0),
    (20, "Горячее", "Оджахури", 720.0, 790.0),
    (21, "Горячее", "Шашлык из баранины", 980.0, 1090.0),
    (22, "Горячее", "Люля-кебаб", 640.0, 690.0),
    (23, "Десерты", "Пеламуши", 320.0, 350.0),
    (24, "Десерты", "Чурчхела", 250.0, 290.0),
    (25, "Десерты", "Медовик", 380.0, 420.0),
    (26, "Напитки", "Лимонад Тархун", 290.0, 320.0),
    (27, "Напитки", "Боржоми", 250.0, 270.0),
    (28, "Напитки", "Саперави, бокал", 540.0, 590.0),
];

/// The restaurant's current price list.
pub fn builtin_items() -> Vec<MenuItem> {
    MENU.iter()
        .map(|&(id, category, name, old_price, new_price)| {
            MenuItem::new(id, category, name, old_price, new_price)
        })
        .collect()
}

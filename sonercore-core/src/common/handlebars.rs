use handlebars::{handlebars_helper, Handlebars};

use crate::tier::classify;

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    handlebars_helper!(tier_class: |score: i64| classify(score).css_class());
    handlebars.register_helper("tier_class", Box::new(tier_class));

    handlebars_helper!(tier_name: |score: i64| classify(score).as_str());
    handlebars.register_helper("tier_name", Box::new(tier_name));

    handlebars
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tier_helpers_use_shared_thresholds() {
        let hb = get_handlebars();
        let out = hb
            .render_template(
                "{{tier_class a}} {{tier_class b}} {{tier_name c}}",
                &json!({"a": 16, "b": 6, "c": 5}),
            )
            .unwrap();
        assert_eq!(out, "complexity-high complexity-medium low");
    }
}

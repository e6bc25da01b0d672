#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    use crate::{
        convert::{ConvertError, SqlValue, TypeConverter},
        sql::{SqlFieldTranslation, SqlPreloadable, SqlTranslations},
    };

    pub fn order_translations() -> SqlTranslations {
        let mut translations: SqlTranslations = serde_json::from_value(json!({
            "id":         { "column": "o.id", "converter": "int" },
            "status":     { "column": "o.status" },
            "quantity":   { "column": "o.quantity", "converter": "int" },
            "price":      { "column": "o.price", "converter": "float" },
            "order_date": { "column": "o.order_date", "converter": "date" },
            "paid_at":    { "column": "o.paid_at", "converter": "iso8601" },
            "express":    { "column": "o.express", "converter": "bool" },
            "city":       { "column": "c.name", "alias": "city" },
            "total":      { "column": "SUM(o.price * o.quantity)", "alias": "total" },
            "orders":     { "column": "COUNT(o.id)", "alias": "orders" }
        }))
        .unwrap();

        translations.insert(
            "country",
            SqlFieldTranslation::new()
                .with_column("c.country_code")
                .with_converter(TypeConverter::custom(|value| match value.len() {
                    2 => Ok(SqlValue::String(value.to_uppercase())),
                    _ => Err(ConvertError::Custom(format!("invalid country code '{value}'"))),
                })),
        );

        translations
    }

    pub fn order_preloads() -> SqlPreloadable {
        [("customer", "Customer"), ("items", "OrderItems")].into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ordered_float::NotNan;

    use super::fixtures::{order_preloads, order_translations};
    use crate::{
        convert::{ConvertError, SqlValue},
        query::Query,
        sql::{expand_placeholders, to_sql, to_sql_plan, SqlCompiler},
        QueryError,
    };

    #[test]
    pub fn test_report_pipeline() {
        let query = Query::try_from(
            "status_in=delivered&status_in=shipped&order_date_gte=2025-02-01&country_eq=pt\
             &group=city&accumulator=orders&accumulator=total&sort=-total&limit=5",
        )
        .unwrap();
        let compiler = SqlCompiler::new(&order_translations());

        let (sql, args) = compiler.statement("orders o JOIN customers c ON c.id = o.customer_id", &query).unwrap();

        assert_eq!(
            sql,
            "SELECT c.name AS city, COUNT(o.id) AS orders, SUM(o.price * o.quantity) AS total \
             FROM orders o JOIN customers c ON c.id = o.customer_id \
             WHERE o.status IN (?) AND o.order_date >= ? AND c.country_code = ? \
             GROUP BY c.name ORDER BY SUM(o.price * o.quantity) DESC LIMIT 5"
        );
        assert_eq!(args, vec![
            SqlValue::List(vec!["delivered".into(), "shipped".into()]),
            SqlValue::Date(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()),
            SqlValue::from("PT"),
        ]);

        let (sql, args) = expand_placeholders(&sql, &args).unwrap();
        assert!(sql.contains("o.status IN (?, ?)"));
        assert_eq!(args.len(), 4);
    }

    #[test]
    pub fn test_listing_plan() {
        let query = Query::try_from("price_lte=99.9&express_eq=t&paid_at_isnull=2025-02-01T10:00:00Z&with=customer&with=items&sort=id&skip=20&limit=10").unwrap();

        let plan = to_sql_plan(&query, &order_translations(), &order_preloads()).unwrap();

        assert_eq!(plan.where_clause, "o.price <= ? AND o.express = ? AND o.paid_at IS NULL");
        assert_eq!(plan.where_args, vec![SqlValue::Float(NotNan::new(99.9).unwrap()), SqlValue::Bool(true)]);
        assert_eq!(plan.select, "");
        assert_eq!(plan.order, "o.id ASC");
        assert_eq!(plan.preload, vec!["Customer", "OrderItems"]);
        assert_eq!(
            plan.to_statement("orders o"),
            "SELECT * FROM orders o WHERE o.price <= ? AND o.express = ? AND o.paid_at IS NULL ORDER BY o.id ASC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    pub fn test_unknown_parameters_are_lenient_but_unknown_fields_are_not() {
        let translations = order_translations();

        let lenient = Query::try_from("page=2&status_like=x&status_eq=new").unwrap();
        assert_eq!(to_sql("orders o", &lenient, &translations).unwrap().0, "SELECT * FROM orders o WHERE o.status = ?");

        let strict = Query::try_from("customer_name_eq=ana").unwrap();
        assert_eq!(to_sql("orders o", &strict, &translations), Err(QueryError::InvalidField("customer_name".into())));
    }

    #[test]
    pub fn test_custom_converter_error() {
        let query = Query::try_from("country_eq=portugal").unwrap();

        assert_eq!(
            to_sql("customers c", &query, &order_translations()),
            Err(QueryError::Convert(ConvertError::Custom("invalid country code 'portugal'".into())))
        );
    }

    #[test]
    pub fn test_shared_translations_across_threads() {
        let translations = order_translations();
        let before = translations.clone();

        std::thread::scope(|scope| {
            for quantity in 1..=4i64 {
                let translations = &translations;
                scope.spawn(move || {
                    let query = Query::try_from(format!("quantity_gt={quantity}").as_str()).unwrap();
                    let (sql, args) = to_sql("orders o", &query, translations).unwrap();

                    assert_eq!(sql, "SELECT * FROM orders o WHERE o.quantity > ?");
                    assert_eq!(args, vec![SqlValue::Int(quantity)]);
                });
            }
        });

        assert_eq!(translations, before);
    }
}

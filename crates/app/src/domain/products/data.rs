//! Products Data

use crate::domain::products::errors::ProductsServiceError;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub supplier: Option<String>,
}

/// Product Update Data
///
/// Updates replace every mutable field.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub supplier: Option<String>,
}

impl NewProduct {
    /// Trim the text fields, then check them.
    pub(crate) fn validated(mut self) -> Result<Self, ProductsServiceError> {
        trim_in_place(&mut self.sku);
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.category);
        self.supplier = normalise_supplier(self.supplier);

        check_fields(&self.sku, &self.name, &self.category, self.price)?;

        Ok(self)
    }
}

impl ProductUpdate {
    /// Trim the text fields, then check them.
    pub(crate) fn validated(mut self) -> Result<Self, ProductsServiceError> {
        trim_in_place(&mut self.sku);
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.category);
        self.supplier = normalise_supplier(self.supplier);

        check_fields(&self.sku, &self.name, &self.category, self.price)?;

        Ok(self)
    }
}

fn check_fields(
    sku: &str,
    name: &str,
    category: &str,
    price: f64,
) -> Result<(), ProductsServiceError> {
    if [sku, name, category].iter().any(|value| value.is_empty()) {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if !price.is_finite() || price < 0.0 {
        return Err(ProductsServiceError::InvalidData);
    }

    Ok(())
}

fn trim_in_place(value: &mut String) {
    if value.trim().len() != value.len() {
        *value = value.trim().to_string();
    }
}

fn normalise_supplier(supplier: Option<String>) -> Option<String> {
    supplier
        .map(|supplier| supplier.trim().to_string())
        .filter(|supplier| !supplier.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product() -> NewProduct {
        NewProduct {
            sku: "T-1".to_string(),
            name: "Test".to_string(),
            category: "X".to_string(),
            price: 10.5,
            stock: 5,
            supplier: Some(String::new()),
        }
    }

    #[test]
    fn validated_clears_blank_supplier() -> testresult::TestResult {
        let product = new_product().validated()?;

        assert_eq!(product.supplier, None);

        Ok(())
    }

    #[test]
    fn validated_trims_text_fields() -> testresult::TestResult {
        let product = NewProduct {
            sku: " T-1 ".to_string(),
            name: "\tTest ".to_string(),
            category: " X".to_string(),
            supplier: Some("  Acme  ".to_string()),
            ..new_product()
        }
        .validated()?;

        assert_eq!(product.sku, "T-1");
        assert_eq!(product.name, "Test");
        assert_eq!(product.category, "X");
        assert_eq!(product.supplier.as_deref(), Some("Acme"));

        Ok(())
    }

    #[test]
    fn update_validated_trims_sku() -> testresult::TestResult {
        let update = ProductUpdate {
            sku: "T-1\n".to_string(),
            name: "Test".to_string(),
            category: "X".to_string(),
            price: 1.0,
            stock: 0,
            supplier: None,
        }
        .validated()?;

        assert_eq!(update.sku, "T-1");

        Ok(())
    }

    #[test]
    fn validated_rejects_blank_required_fields() {
        let mut product = new_product();

        product.name = "   ".to_string();

        assert!(matches!(
            product.validated(),
            Err(ProductsServiceError::MissingRequiredData)
        ));
    }

    #[test]
    fn validated_rejects_negative_or_nan_price() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let mut product = new_product();

            product.price = price;

            assert!(
                matches!(product.validated(), Err(ProductsServiceError::InvalidData)),
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut product = new_product();

        product.price = 0.0;

        assert!(product.validated().is_ok());
    }
}

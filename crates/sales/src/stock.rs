//! Stock guard: order line admission with atomic check-then-decrement.

use tradegate_core::{DomainError, DomainResult};
use tradegate_store::{Dataset, OrderLine, OrderLineInsertHook};

/// Before-insert hook gating order line admission on available stock.
///
/// Runs inside the insert transaction, so the check and the decrement are
/// atomic with respect to every other insertion against the same product:
/// two concurrent insertions can never both be admitted against stock that
/// covers only one of them.
pub struct StockGuard;

impl OrderLineInsertHook for StockGuard {
    fn before_insert(&self, data: &mut Dataset, line: &OrderLine) -> DomainResult<()> {
        if line.quantity < 0 {
            return Err(DomainError::validation(format!(
                "quantity cannot be negative (got {})",
                line.quantity
            )));
        }

        let product = data.product_mut(line.product_id)?;

        if line.quantity > product.stock {
            tracing::warn!(
                order_id = %line.order_id,
                product_id = %line.product_id,
                requested = line.quantity,
                available = product.stock,
                "order line rejected: insufficient stock"
            );
            return Err(DomainError::insufficient_stock(line.quantity, product.stock));
        }

        product.stock -= line.quantity;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradegate_core::{OrderId, ProductId};
    use tradegate_store::Product;

    fn dataset_with_stock(stock: i64) -> Dataset {
        let mut data = Dataset::new();
        data.insert_product(Product {
            id: ProductId::new(10),
            name: "Ikura".into(),
            unit_price: 3100,
            stock,
        })
        .unwrap();
        data
    }

    fn line(quantity: i64) -> OrderLine {
        OrderLine {
            order_id: OrderId::new(10692),
            product_id: ProductId::new(10),
            unit_price: 3100,
            quantity,
            discount: 0,
        }
    }

    #[test]
    fn admission_decrements_stock_by_quantity() {
        let mut data = dataset_with_stock(31);

        StockGuard.before_insert(&mut data, &line(27)).unwrap();

        assert_eq!(data.product(ProductId::new(10)).unwrap().stock, 4);
    }

    #[test]
    fn exact_stock_is_admitted_down_to_zero() {
        let mut data = dataset_with_stock(27);

        StockGuard.before_insert(&mut data, &line(27)).unwrap();

        assert_eq!(data.product(ProductId::new(10)).unwrap().stock, 0);
    }

    #[test]
    fn overdraw_is_rejected_with_available_quantity() {
        let mut data = dataset_with_stock(10);

        let err = StockGuard.before_insert(&mut data, &line(11)).unwrap_err();

        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 11,
                available: 10,
            }
        );
        assert_eq!(data.product(ProductId::new(10)).unwrap().stock, 10);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let mut data = Dataset::new();

        let err = StockGuard.before_insert(&mut data, &line(1)).unwrap_err();

        assert!(matches!(err, DomainError::UnknownReference { .. }));
    }

    #[test]
    fn negative_quantity_is_rejected_before_the_lookup() {
        let mut data = dataset_with_stock(10);

        let err = StockGuard.before_insert(&mut data, &line(-3)).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(data.product(ProductId::new(10)).unwrap().stock, 10);
    }
}

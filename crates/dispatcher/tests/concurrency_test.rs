#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use elevator_core::models::*;
    use elevator_core::FloorRequestService;
    use elevator_dispatcher::FloorRequestDispatcher;

    #[test]
    fn test_concurrent_adds_keep_invariants() {
        let dispatcher = Arc::new(FloorRequestDispatcher::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let dispatcher = Arc::clone(&dispatcher);
                thread::spawn(move || {
                    for floor in 1..=50 {
                        let direction = if (floor + worker) % 2 == 0 {
                            Direction::Up
                        } else {
                            Direction::Down
                        };
                        dispatcher.add_request(FloorRequest::external(floor, direction));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let requests = dispatcher.get_all_requests();
        assert_eq!(requests.len(), 50);
        assert!(requests.windows(2).all(|pair| pair[0].floor < pair[1].floor));
        // 每层都收到了上下两个方向的请求
        assert!(requests.iter().all(|r| r.direction == Direction::Both));
    }

    #[test]
    fn test_concurrent_service_drains_all_requests() {
        let dispatcher = Arc::new(FloorRequestDispatcher::new());
        for floor in 1..=200 {
            dispatcher.add_request(FloorRequest::internal(floor));
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let dispatcher = Arc::clone(&dispatcher);
                thread::spawn(move || {
                    // 每次服务都删除一个内部请求，4 x 100 次足以清空 200 个请求
                    for _ in 0..100 {
                        dispatcher.get_next_stop();
                        dispatcher.service_current_floor();
                        let snapshot = dispatcher.get_all_requests();
                        assert!(snapshot.windows(2).all(|pair| pair[0].floor < pair[1].floor));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(dispatcher.is_empty());
        assert!(dispatcher.get_next_stop().is_none());
    }
}
